//! Top-level module for cell-complex topology.
//!
//! This module provides the combinatorial half of a mesh and the mesh itself:
//! - [`Cell`] boundary lists and [`Grid`] incidence tables with derived links
//! - [`GridBuilder`] for assembling and validating levels bottom-up
//! - [`Mesh`], pairing a grid with vertex positions, and its [`CellRef`] proxies
//! - Optional duplicate and link checks in [`validation`]

pub mod builder;
pub mod cell;
pub mod grid;
pub mod mesh;
pub mod validation;
pub mod view;

pub use builder::GridBuilder;
pub use cell::{Cell, Link};
pub use grid::Grid;
pub use mesh::Mesh;
pub use view::{CellRef, Neighbors};
