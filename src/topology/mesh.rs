//! `Mesh<N>`: a cell complex embedded in N-dimensional space.
//!
//! A mesh pairs a vertex buffer with a [`Grid`] of top dimension `M <= N`
//! (a surface mesh in 3-space has `M = 2`). Both halves sit behind [`Arc`]s:
//! cloning a mesh, or deriving a projection from it, shares storage, and the
//! geometric transforms copy the vertex buffer before writing when it is
//! shared ([`Arc::make_mut`]). The grid is never mutated after construction.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), mesh_hyperslice::mesh_error::MeshError> {
//! use mesh_hyperslice::geometry::Vector;
//! use mesh_hyperslice::topology::{Cell, Mesh};
//!
//! let vertices = vec![
//!     Vector::new([0.0, 0.0]),
//!     Vector::new([1.0, 0.0]),
//!     Vector::new([0.0, 1.0]),
//! ];
//! let edges: Vec<Cell> = vec![[0, 1].into(), [1, 2].into(), [2, 0].into()];
//! let faces: Vec<Cell> = vec![[0, 1, 2].into()];
//! let mesh = Mesh::try_new(vertices, [edges, faces])?;
//! assert_eq!(mesh.dim(), 2);
//! assert_eq!(mesh.link(0)[0], vec![0, 2]);
//! # Ok(())
//! # }
//! ```

use crate::algs::transform::{VertexTransform, transform_vertices};
use crate::geometry::{Basis, Vector};
use crate::mesh_error::MeshError;
use crate::topology::builder::GridBuilder;
use crate::topology::cell::{Cell, Link};
use crate::topology::grid::Grid;
use crate::topology::view::CellRef;
use std::sync::Arc;

/// Vertex buffer plus incidence table.
#[derive(Clone, Debug)]
pub struct Mesh<const N: usize> {
    vert: Arc<Vec<Vector<N>>>,
    grid: Arc<Grid>,
}

impl<const N: usize> Mesh<N> {
    /// Builds a mesh from vertices and flat cell levels (edges first).
    ///
    /// # Errors
    /// * Any construction error of the grid (see [`GridBuilder::build`]).
    /// * [`MeshError::DimensionTooHigh`] if more than `N` levels are given.
    pub fn try_new<I, L, C>(vertices: Vec<Vector<N>>, levels: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let grid = levels
            .into_iter()
            .fold(GridBuilder::new(vertices.len()), |b, level| b.level(level))
            .build()?;
        Self::try_from_grid(vertices, grid)
    }

    /// Pairs a vertex buffer with an already built grid.
    ///
    /// # Errors
    /// [`MeshError::VertexCountMismatch`] or [`MeshError::DimensionTooHigh`].
    pub fn try_from_grid(vertices: Vec<Vector<N>>, grid: Grid) -> Result<Self, MeshError> {
        Self::try_from_shared(Arc::new(vertices), Arc::new(grid))
    }

    /// Pairs shared storage, checking that the halves fit together.
    pub fn try_from_shared(
        vertices: Arc<Vec<Vector<N>>>,
        grid: Arc<Grid>,
    ) -> Result<Self, MeshError> {
        if grid.vertex_count() != vertices.len() {
            return Err(MeshError::VertexCountMismatch {
                expected: grid.vertex_count(),
                found: vertices.len(),
            });
        }
        if grid.dim() > N {
            return Err(MeshError::DimensionTooHigh {
                top: grid.dim(),
                ambient: N,
            });
        }
        Ok(Self {
            vert: vertices,
            grid,
        })
    }

    /// Pairs parts produced by an algorithm of this crate.
    pub(crate) fn from_parts(vertices: Vec<Vector<N>>, grid: Grid) -> Self {
        Self::from_shared_parts(vertices, Arc::new(grid))
    }

    /// [`Mesh::from_parts`] reusing a shared grid.
    pub(crate) fn from_shared_parts(vertices: Vec<Vector<N>>, grid: Arc<Grid>) -> Self {
        debug_assert_eq!(grid.vertex_count(), vertices.len());
        debug_assert!(grid.dim() <= N);
        Self {
            vert: Arc::new(vertices),
            grid,
        }
    }

    /// Top cell dimension `M`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The shared incidence table.
    #[inline]
    pub fn shared_grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    #[inline]
    pub fn vert(&self) -> &[Vector<N>] {
        &self.vert
    }

    /// 1-cells; empty when the mesh has no edges.
    pub fn edge(&self) -> &[Cell] {
        self.grid.get_cells(1).unwrap_or(&[])
    }

    /// 2-cells; empty when the mesh has dimension below 2.
    pub fn face(&self) -> &[Cell] {
        self.grid.get_cells(2).unwrap_or(&[])
    }

    /// 3-cells; empty when the mesh has dimension below 3.
    pub fn body(&self) -> &[Cell] {
        self.grid.get_cells(3).unwrap_or(&[])
    }

    /// Cells of dimension `k`, `1 <= k <= dim()`.
    #[inline]
    pub fn cell(&self, k: usize) -> &[Cell] {
        self.grid.cells(k)
    }

    /// Link table of dimension `k`, `0 <= k < dim()`.
    #[inline]
    pub fn link(&self, k: usize) -> &[Link] {
        self.grid.links(k)
    }

    /// Proxy for entry `id` at dimension `k` (a vertex when `k == 0`).
    #[inline]
    pub fn cell_ref(&self, k: usize, id: usize) -> CellRef<'_, N> {
        CellRef::new(self, k, id)
    }

    /// Proxies for every entry at dimension `k`.
    pub fn cells_at(&self, k: usize) -> impl ExactSizeIterator<Item = CellRef<'_, N>> + '_ {
        (0..self.grid.len(k)).map(move |id| CellRef::new(self, k, id))
    }

    /// Proxies for the top-dimension cells.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = CellRef<'_, N>> + '_ {
        self.cells_at(self.dim())
    }

    /// True when both meshes use the same vertex buffer.
    pub fn shares_vertices(&self, other: &Mesh<N>) -> bool {
        Arc::ptr_eq(&self.vert, &other.vert)
    }

    /// The vertex buffer, unshared first if another mesh holds it.
    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<Vector<N>> {
        if Arc::strong_count(&self.vert) > 1 {
            log::trace!("copying shared vertex buffer ({} vertices)", self.vert.len());
        }
        Arc::make_mut(&mut self.vert)
    }

    /// Rewrites every vertex with `f`, which receives the vertex index too.
    pub fn map_vertices<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, &mut Vector<N>),
    {
        transform_vertices(self, VertexTransform::Function(&mut f));
    }

    /// Rotates every vertex in the `(i, j)` plane about the origin.
    pub fn rot(&mut self, i: usize, j: usize, angle: f64) {
        transform_vertices(self, VertexTransform::Rotate { i, j, angle });
    }

    /// Rotates every vertex in the `(i, j)` plane about `center`.
    pub fn rot_about(&mut self, center: &Vector<N>, i: usize, j: usize, angle: f64) {
        transform_vertices(
            self,
            VertexTransform::RotateAbout {
                center,
                i,
                j,
                angle,
            },
        );
    }

    /// Rotates every vertex in the `(i, j)` plane of `basis` coordinates.
    pub fn rot_in(&mut self, basis: &Basis<N, N>, i: usize, j: usize, angle: f64) {
        transform_vertices(
            self,
            VertexTransform::RotateInBasis {
                basis,
                i,
                j,
                angle,
            },
        );
    }

    /// Translates every vertex by `offset`.
    pub fn mov(&mut self, offset: &Vector<N>) {
        transform_vertices(self, VertexTransform::Translate(offset));
    }

    /// Mirrors every vertex through the hyperplane `(center, normal)`.
    pub fn reflect(&mut self, center: &Vector<N>, normal: &Vector<N>) {
        transform_vertices(self, VertexTransform::Reflect { center, normal });
    }
}

impl<'a, const N: usize> IntoIterator for &'a Mesh<N> {
    type Item = CellRef<'a, N>;
    type IntoIter = Box<dyn ExactSizeIterator<Item = CellRef<'a, N>> + 'a>;
    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
