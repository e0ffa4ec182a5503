//! Linear-algebra primitives consumed by the topology and slicing code.
//!
//! Only what the kernel needs: fixed-size vectors and orthonormal bases of
//! affine subspaces (Gram-Schmidt, orthogonal complement, local coordinates).

pub mod basis;
pub mod vector;

pub use basis::Basis;
pub use vector::{EPSILON, Vector};
