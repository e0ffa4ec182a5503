//! Orthonormal bases of affine subspaces.
//!
//! A [`Basis<N, M>`] is an origin (`center`) plus `M` orthonormal axes in
//! N-dimensional space. It maps world points into subspace coordinates
//! ([`Basis::put`]) and back ([`Basis::get`]). A basis with `M == N - 1` describes
//! a hyperplane; its [`Basis::normal`] is the orthogonal complement, or the
//! normal it was built from when it came from [`Basis::try_hyperplane`].

use crate::geometry::vector::{EPSILON, Vector};
use crate::mesh_error::MeshError;
use num_traits::Zero;
use std::array;

/// Orthonormal basis of an `M`-dimensional affine subspace of `N`-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis<const N: usize, const M: usize> {
    center: Vector<N>,
    axes: [Vector<N>; M],
    /// Unit normal as given to [`Basis::try_hyperplane`], kept bit for bit.
    normal: Option<Vector<N>>,
}

impl<const N: usize, const M: usize> Basis<N, M> {
    /// Basis spanned by the first `M` coordinate axes, anchored at `center`.
    pub fn identity(center: Vector<N>) -> Self {
        const { assert!(M <= N, "subspace dimension must not exceed the ambient dimension") };
        Self {
            center,
            axes: array::from_fn(Vector::unit),
            normal: None,
        }
    }

    /// Orthonormalizes `axes` (Gram-Schmidt, in order) into a basis.
    ///
    /// # Errors
    /// [`MeshError::DegenerateBasis`] if an axis is (nearly) a combination of
    /// the axes before it, relative to its own length.
    pub fn try_new(center: Vector<N>, axes: [Vector<N>; M]) -> Result<Self, MeshError> {
        const { assert!(M <= N, "subspace dimension must not exceed the ambient dimension") };
        let mut ortho: Vec<Vector<N>> = Vec::with_capacity(M);
        for (axis, v) in axes.iter().enumerate() {
            let residual = reject(*v, &ortho);
            let len2 = residual.len2();
            if !len2.is_finite() || len2 <= EPSILON * v.len2() {
                return Err(MeshError::DegenerateBasis { axis });
            }
            ortho.push(residual / len2.sqrt());
        }
        Ok(Self {
            center,
            axes: array::from_fn(|i| ortho[i]),
            normal: None,
        })
    }

    #[inline]
    pub fn center(&self) -> &Vector<N> {
        &self.center
    }

    #[inline]
    pub fn axes(&self) -> &[Vector<N>; M] {
        &self.axes
    }

    /// Coordinates of the world point `p` in this basis (orthogonal projection
    /// onto the subspace).
    pub fn put(&self, p: &Vector<N>) -> Vector<M> {
        let rad = *p - self.center;
        Vector::new(array::from_fn(|i| rad.dot(&self.axes[i])))
    }

    /// World point for the subspace coordinates `q`.
    pub fn get(&self, q: &Vector<M>) -> Vector<N> {
        self.axes
            .iter()
            .zip(q.iter())
            .fold(self.center, |acc, (axis, x)| acc + *axis * *x)
    }

    /// Orthonormal vectors completing the axes to a basis of the whole space,
    /// `N - M` of them.
    pub fn complement(&self) -> Vec<Vector<N>> {
        let mut all = self.axes.to_vec();
        complete(&mut all, N);
        all.split_off(M)
    }

    /// Unit normal of the subspace: the stored hyperplane normal, else the
    /// first complement vector. Zero when the basis spans the whole space.
    pub fn normal(&self) -> Vector<N> {
        self.normal
            .or_else(|| self.complement().first().copied())
            .unwrap_or_else(Vector::zero)
    }

    /// Extends the basis with complement vectors up to `K` axes.
    pub fn extend<const K: usize>(&self) -> Basis<N, K> {
        const { assert!(M <= K && K <= N, "extension must satisfy M <= K <= N") };
        let mut all = self.axes.to_vec();
        complete(&mut all, K);
        Basis {
            center: self.center,
            axes: array::from_fn(|i| all[i]),
            normal: None,
        }
    }

    /// Rotates the whole frame about the origin in the `(i, j)` plane.
    pub fn rot(&self, i: usize, j: usize, angle: f64) -> Self {
        Self {
            center: self.center.rot(i, j, angle),
            axes: self.axes.map(|a| a.rot(i, j, angle)),
            normal: self.normal.map(|n| n.rot(i, j, angle)),
        }
    }

    /// Translates the frame by `offset`.
    pub fn mov(&self, offset: &Vector<N>) -> Self {
        Self {
            center: self.center.mov(offset),
            axes: self.axes,
            normal: self.normal,
        }
    }
}

impl<const N: usize, const M: usize> Basis<N, M> {
    /// Hyperplane through `center` orthogonal to `normal`.
    ///
    /// The in-plane axes are chosen by completing the normal with coordinate
    /// axes. [`Basis::normal`] of the result is `normal` normalized, exactly as
    /// computed here, so points with `(p - center) . normal == 0` stay on it.
    ///
    /// # Errors
    /// [`MeshError::DegenerateBasis`] if `normal` is zero or not finite.
    pub fn try_hyperplane(center: Vector<N>, normal: Vector<N>) -> Result<Self, MeshError> {
        const { assert!(M + 1 == N, "a hyperplane has dimension N - 1") };
        let len2 = normal.len2();
        if len2 == 0.0 || !len2.is_finite() {
            return Err(MeshError::DegenerateBasis { axis: 0 });
        }
        let unit = normal / len2.sqrt();
        let mut all = vec![unit];
        complete(&mut all, N);
        Ok(Self {
            center,
            axes: array::from_fn(|i| all[i + 1]),
            normal: Some(unit),
        })
    }
}

/// Component of `v` orthogonal to the orthonormal set `ortho`.
fn reject<const N: usize>(v: Vector<N>, ortho: &[Vector<N>]) -> Vector<N> {
    ortho.iter().fold(v, |acc, u| acc - *u * acc.dot(u))
}

/// Grows the orthonormal set `ortho` with coordinate axes until it has
/// `target` vectors. Candidates have unit length, so the cutoff is relative.
fn complete<const N: usize>(ortho: &mut Vec<Vector<N>>, target: usize) {
    for axis in 0..N {
        if ortho.len() >= target {
            break;
        }
        let residual = reject(Vector::unit(axis), ortho);
        let len2 = residual.len2();
        if len2 >= EPSILON {
            ortho.push(residual / len2.sqrt());
        }
    }
}
