//! `Cell`: the boundary list of one k-dimensional cell.
//!
//! A cell at dimension `k` stores indices into the cell list at dimension
//! `k - 1` (into the vertex array when `k == 1`). Edges hold exactly two
//! vertex indices; higher cells hold any non-empty number of boundary cells.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Ordered list of boundary-cell indices.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(Vec<usize>);

/// Reverse incidence of one cell: the sorted ids of the cells one dimension
/// higher that contain it.
pub type Link = Vec<usize>;

impl Cell {
    /// Creates a cell from its boundary indices.
    #[inline]
    pub fn new(items: Vec<usize>) -> Self {
        Cell(items)
    }

    /// Boundary indices as a slice.
    #[inline]
    pub fn items(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the cell and returns its boundary indices.
    #[inline]
    pub fn into_items(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Cell {
    type Target = [usize];
    #[inline]
    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Cell {
    fn from(items: Vec<usize>) -> Self {
        Cell(items)
    }
}

impl<const K: usize> From<[usize; K]> for Cell {
    fn from(items: [usize; K]) -> Self {
        Cell(items.to_vec())
    }
}

impl FromIterator<usize> for Cell {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Cell(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cell {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
