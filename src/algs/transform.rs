//! Vertex transformation helpers for meshes.
//!
//! Transforms rewrite vertex positions only; the incidence table is left
//! untouched. A shared vertex buffer is copied before the first write, so
//! meshes that shared storage with the transformed one keep their positions.

use crate::geometry::{Basis, Vector};
use crate::topology::mesh::Mesh;

/// Vertex update strategies for mesh transforms.
pub enum VertexTransform<'a, const N: usize> {
    /// Update vertices using a user-supplied function.
    ///
    /// The function receives the vertex index and the vertex to rewrite.
    Function(&'a mut dyn FnMut(usize, &mut Vector<N>)),
    /// Rotation about the origin in the `(i, j)` coordinate plane.
    Rotate { i: usize, j: usize, angle: f64 },
    /// Rotation about `center` in the `(i, j)` coordinate plane.
    RotateAbout {
        center: &'a Vector<N>,
        i: usize,
        j: usize,
        angle: f64,
    },
    /// Rotation in the plane of axes `i` and `j` of `basis`, about its center.
    RotateInBasis {
        basis: &'a Basis<N, N>,
        i: usize,
        j: usize,
        angle: f64,
    },
    /// Translation by a fixed offset.
    Translate(&'a Vector<N>),
    /// Mirror image through the hyperplane `(center, normal)`.
    Reflect {
        center: &'a Vector<N>,
        normal: &'a Vector<N>,
    },
}

/// Apply a vertex transformation to a mesh, leaving topology unchanged.
pub fn transform_vertices<const N: usize>(mesh: &mut Mesh<N>, transform: VertexTransform<'_, N>) {
    let vertices = mesh.vertices_mut();
    match transform {
        VertexTransform::Function(update) => {
            for (i, v) in vertices.iter_mut().enumerate() {
                update(i, v);
            }
        }
        VertexTransform::Rotate { i, j, angle } => {
            for v in vertices.iter_mut() {
                *v = v.rot(i, j, angle);
            }
        }
        VertexTransform::RotateAbout {
            center,
            i,
            j,
            angle,
        } => {
            for v in vertices.iter_mut() {
                *v = v.rot_about(center, i, j, angle);
            }
        }
        VertexTransform::RotateInBasis {
            basis,
            i,
            j,
            angle,
        } => {
            for v in vertices.iter_mut() {
                *v = basis.get(&basis.put(v).rot(i, j, angle));
            }
        }
        VertexTransform::Translate(offset) => {
            for v in vertices.iter_mut() {
                *v = v.mov(offset);
            }
        }
        VertexTransform::Reflect { center, normal } => {
            for v in vertices.iter_mut() {
                *v = v.reflect(center, normal);
            }
        }
    }
}
