//! Re-export public algorithms.

pub mod classify;
pub mod project;
pub mod rect;
pub mod slice;
pub mod transform;

pub use classify::{CellState, Classification, Side, SliceOptions, classify};
pub use project::get_project;
pub use rect::hyperrect;
pub use slice::{get_clipped, get_clipped_with, get_section, get_section_with};
pub use transform::{VertexTransform, transform_vertices};
