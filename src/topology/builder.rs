//! Incidence builder: flat per-dimension cell lists → [`Grid`].
//!
//! The builder validates each level once against the level below it and then
//! derives every reverse link table. Link derivation is a pure function of
//! the cell lists: for each cell `c` at dimension `k` and each child `i` of
//! `c`, `c` is appended to `link(k - 1)[i]`. The pass is linear in the total
//! number of incidences and yields sorted, duplicate-free links.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), mesh_hyperslice::mesh_error::MeshError> {
//! use mesh_hyperslice::topology::builder::GridBuilder;
//!
//! // A triangle: 3 vertices, 3 edges, 1 face.
//! let grid = GridBuilder::new(3)
//!     .level([[0, 1], [1, 2], [2, 0]])
//!     .level([[0, 1, 2]])
//!     .build()?;
//! assert_eq!(grid.dim(), 2);
//! assert_eq!(grid.links(0)[1], vec![0, 1]);
//! assert_eq!(grid.links(1)[2], vec![0]);
//! # Ok(())
//! # }
//! ```

use crate::mesh_error::MeshError;
use crate::topology::cell::{Cell, Link};
use crate::topology::grid::Grid;

/// Collects cell levels bottom-up (edges first) and builds a validated [`Grid`].
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    vertex_count: usize,
    levels: Vec<Vec<Cell>>,
}

impl GridBuilder {
    /// Starts a grid over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            levels: Vec::new(),
        }
    }

    /// Appends the next dimension level (edges, then faces, then bodies, ...).
    pub fn level<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.levels.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Number of levels added so far.
    pub fn dim(&self) -> usize {
        self.levels.len()
    }

    /// Validates every level and derives the link tables.
    ///
    /// # Errors
    /// The first malformed edge, empty cell or dangling boundary index found,
    /// scanning from dimension 1 upwards.
    pub fn build(self) -> Result<Grid, MeshError> {
        let mut lower_len = self.vertex_count;
        for (k, cells) in self.levels.iter().enumerate() {
            validate_level(k + 1, cells, lower_len)?;
            lower_len = cells.len();
        }
        Ok(Grid::from_cells_unchecked(self.vertex_count, self.levels))
    }
}

/// Checks one level of cells against the size of the level below.
///
/// # Errors
/// * [`MeshError::MalformedEdge`] if `dim == 1` and a cell is not a pair.
/// * [`MeshError::EmptyCell`] if a higher cell has no boundary.
/// * [`MeshError::DanglingIndex`] if an index is `>= lower_len`.
pub fn validate_level(dim: usize, cells: &[Cell], lower_len: usize) -> Result<(), MeshError> {
    for (cell, items) in cells.iter().enumerate() {
        if dim == 1 && items.len() != 2 {
            return Err(MeshError::MalformedEdge {
                cell,
                len: items.len(),
            });
        }
        if items.is_empty() {
            return Err(MeshError::EmptyCell { dim, cell });
        }
        if let Some(&index) = items.iter().find(|&&i| i >= lower_len) {
            return Err(MeshError::DanglingIndex {
                dim,
                cell,
                index,
                len: lower_len,
            });
        }
    }
    Ok(())
}

/// Reverse incidence of `cells` over a lower level of `lower_len` entries.
///
/// Indices are trusted to be in range.
pub fn derive_links(lower_len: usize, cells: &[Cell]) -> Vec<Link> {
    let mut links: Vec<Link> = vec![Vec::new(); lower_len];
    for (c, cell) in cells.iter().enumerate() {
        for &i in cell.iter() {
            let link = &mut links[i];
            if link.last() != Some(&c) {
                link.push(c);
            }
        }
    }
    links
}

/// Link tables for every level of `cells` (`cells[k - 1]` holds dimension `k`).
pub(crate) fn derive_all_links(vertex_count: usize, cells: &[Vec<Cell>]) -> Vec<Vec<Link>> {
    let mut lower_len = vertex_count;
    let mut links = Vec::with_capacity(cells.len());
    for level in cells {
        links.push(derive_links(lower_len, level));
        lower_len = level.len();
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_sorted_and_unique() {
        let cells = vec![Cell::from([0, 1, 0]), Cell::from([1, 2]), Cell::from([0, 2])];
        let links = derive_links(3, &cells);
        assert_eq!(links, vec![vec![0, 2], vec![0, 1], vec![1, 2]]);
    }

    #[test]
    fn unreferenced_entries_get_empty_links() {
        let links = derive_links(4, &[Cell::from([0, 1])]);
        assert_eq!(links[2], Vec::<usize>::new());
        assert_eq!(links.len(), 4);
    }

    #[test]
    fn edges_must_be_pairs() {
        let err = GridBuilder::new(3).level([vec![0, 1, 2]]).build();
        assert_eq!(err, Err(MeshError::MalformedEdge { cell: 0, len: 3 }));
    }

    #[test]
    fn dangling_face_reference_is_reported() {
        let err = GridBuilder::new(3)
            .level([[0, 1], [1, 2]])
            .level([vec![0, 1, 2]])
            .build();
        assert_eq!(
            err,
            Err(MeshError::DanglingIndex {
                dim: 2,
                cell: 0,
                index: 2,
                len: 2
            })
        );
    }

    #[test]
    fn empty_faces_are_rejected() {
        let err = GridBuilder::new(2)
            .level([[0, 1]])
            .level([Vec::<usize>::new()])
            .build();
        assert_eq!(err, Err(MeshError::EmptyCell { dim: 2, cell: 0 }));
    }
}
