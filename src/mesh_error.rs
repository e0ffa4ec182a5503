//! MeshError: Unified error type for mesh-hyperslice public APIs
//!
//! Construction of grids and meshes is the only place where malformed input is
//! reported; the geometric hot paths (classification, rebuilding) never fail
//! for a well-formed complex.

use thiserror::Error;

/// Unified error type for mesh-hyperslice operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// An edge must reference exactly two vertices.
    #[error("Malformed edge {cell}: expected 2 vertex indices, found {len}")]
    MalformedEdge { cell: usize, len: usize },
    /// A cell of dimension > 0 must reference at least one boundary cell.
    #[error("Empty cell {cell} at dimension {dim}")]
    EmptyCell { dim: usize, cell: usize },
    /// A cell references a boundary cell that does not exist.
    #[error(
        "Dangling index in cell {cell} at dimension {dim}: {index} is out of range (len {len})"
    )]
    DanglingIndex {
        dim: usize,
        cell: usize,
        index: usize,
        len: usize,
    },
    /// The complex has more cell dimensions than its ambient space.
    #[error("Cell dimension {top} exceeds ambient dimension {ambient}")]
    DimensionTooHigh { top: usize, ambient: usize },
    /// The vertex buffer does not match the grid it is paired with.
    #[error("Vertex count mismatch: grid expects {expected}, found {found}")]
    VertexCountMismatch { expected: usize, found: usize },
    /// Requested a dimension level the grid does not have.
    #[error("Invalid dimension {dim} (grid dimension is {max})")]
    InvalidDimension { dim: usize, max: usize },
    /// Gram-Schmidt produced a (near-)zero axis.
    #[error("Degenerate basis: axis {axis} is linearly dependent on the previous axes")]
    DegenerateBasis { axis: usize },
    /// Slice tolerance must be finite and non-negative.
    #[error("Invalid slice tolerance {0}")]
    InvalidTolerance(f64),
    /// A cell references the same boundary cell twice.
    #[error("Cell {cell} at dimension {dim} references child {child} more than once")]
    DuplicateChild {
        dim: usize,
        cell: usize,
        child: usize,
    },
    /// Two cells of one level have the same boundary set.
    #[error("Cells {first} and {second} at dimension {dim} have the same boundary")]
    DuplicateCell {
        dim: usize,
        first: usize,
        second: usize,
    },
    /// A link table is not the inverse of the cell table above it.
    #[error("Link table at dimension {dim} is inconsistent for index {index}")]
    LinkMismatch { dim: usize, index: usize },
}
