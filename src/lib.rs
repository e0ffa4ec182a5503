#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-hyperslice
//!
//! mesh-hyperslice is a dimension-generic geometric kernel for convex cell
//! complexes embedded in N-dimensional space. It stores points, edges, faces,
//! bodies and higher cells in a per-dimension incidence table with derived
//! reverse links, and cuts complexes by hyperplanes.
//!
//! ## Features
//! - [`Grid`](topology::Grid) incidence tables built and validated once by
//!   [`GridBuilder`](topology::GridBuilder), with every link table derived
//! - [`Mesh<N>`](topology::Mesh) with shared copy-on-write vertex storage,
//!   proxy views for traversal, rotations, translation and reflection
//! - Hyperplane cuts: [`get_clipped`](algs::get_clipped) (half-space clip),
//!   [`get_section`](algs::get_section) (cross section one dimension down)
//!   and [`get_project`](algs::get_project) (orthogonal projection)
//! - A hyper-rectangle generator for any dimension
//! - Optional `rayon` parallel classification
//!
//! ## Usage
//! ```rust
//! use mesh_hyperslice::prelude::*;
//! use num_traits::Zero;
//!
//! let cube = hyperrect(&Vector::splat(-1.0), &Vector::<3>::splat(1.0));
//! let plane = Basis::<3, 2>::identity(Vector::zero());
//! let section = get_section(&cube, &plane);
//! assert_eq!(section.vert().len(), 4);
//! assert_eq!(section.edge().len(), 4);
//! assert_eq!(section.face().len(), 1);
//! ```
//!
//! ## Invariant checks
//! Grids produced by the algorithms are checked against their link tables in
//! debug builds and panic on a violation; enable `check-invariants` or
//! `strict-invariants` to keep the checks in release builds.

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::classify::{CellState, Side, SliceOptions, classify};
    pub use crate::algs::project::get_project;
    pub use crate::algs::rect::hyperrect;
    pub use crate::algs::slice::{get_clipped, get_clipped_with, get_section, get_section_with};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{Basis, Vector};
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::validation::{DuplicateHandling, GridValidationOptions, validate_grid};
    pub use crate::topology::{Cell, CellRef, Grid, GridBuilder, Mesh};
}
