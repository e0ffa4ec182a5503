//! `Grid`: the per-dimension incidence table of a cell complex.
//!
//! A grid of dimension `M` stores, for every `k` in `1..=M`, the list of
//! k-cells (each a [`Cell`] of indices into dimension `k - 1`), and for every
//! `k` in `0..M` the reverse link table (k-cell → containing (k+1)-cells).
//! Levels are kept as one flat collection per dimension and addressed by an
//! explicit dimension integer.
//!
//! Links are never authored directly. They are derived at build time and
//! again whenever a level is replaced ([`Grid::try_set_cells`]), so
//! `links(k)[i] == { c : i ∈ cells(k + 1)[c] }` always holds.
//!
//! Index access is unchecked beyond Rust's bounds checks: asking for a level
//! outside `1..=dim` (cells) or `0..dim` (links) panics.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::builder::{GridBuilder, derive_all_links, derive_links, validate_level};
use crate::topology::cell::{Cell, Link};
use serde::{Deserialize, Serialize};

/// Per-dimension cells and reverse links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData", into = "GridData")]
pub struct Grid {
    vertex_count: usize,
    /// `cells[k - 1]`: cells of dimension `k`.
    cells: Vec<Vec<Cell>>,
    /// `links[k]`: link table of dimension `k`.
    links: Vec<Vec<Link>>,
}

/// Serialized form: links are derived again on load.
#[derive(Serialize, Deserialize)]
struct GridData {
    vertex_count: usize,
    cells: Vec<Vec<Cell>>,
}

impl TryFrom<GridData> for Grid {
    type Error = MeshError;
    fn try_from(data: GridData) -> Result<Self, MeshError> {
        Grid::try_from_cells(data.vertex_count, data.cells)
    }
}

impl From<Grid> for GridData {
    fn from(grid: Grid) -> Self {
        GridData {
            vertex_count: grid.vertex_count,
            cells: grid.cells,
        }
    }
}

impl Grid {
    /// A grid with vertices only (dimension 0).
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Builds a validated grid from flat levels (edges first).
    ///
    /// # Errors
    /// See [`GridBuilder::build`].
    pub fn try_from_cells<I>(vertex_count: usize, levels: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        levels
            .into_iter()
            .fold(GridBuilder::new(vertex_count), |b, level| b.level(level))
            .build()
    }

    /// Builds a grid from levels known to be well formed (produced by an
    /// algorithm of this crate). Links are derived; invariants are checked
    /// when invariant checking is enabled.
    pub(crate) fn from_cells_unchecked(vertex_count: usize, cells: Vec<Vec<Cell>>) -> Self {
        let links = derive_all_links(vertex_count, &cells);
        let grid = Self {
            vertex_count,
            cells,
            links,
        };
        crate::debug_invariants!(grid.validate_invariants(), "Grid::from_cells_unchecked");
        grid
    }

    /// Top cell dimension `M`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of entries at dimension `k` (vertices for `k == 0`).
    #[inline]
    pub fn len(&self, k: usize) -> usize {
        if k == 0 {
            self.vertex_count
        } else {
            self.cells[k - 1].len()
        }
    }

    /// Cells of dimension `k`, `1 <= k <= dim()`.
    #[inline]
    pub fn cells(&self, k: usize) -> &[Cell] {
        &self.cells[k - 1]
    }

    /// Cells of dimension `k`, or `None` outside `1..=dim()`.
    pub fn get_cells(&self, k: usize) -> Option<&[Cell]> {
        k.checked_sub(1)
            .and_then(|i| self.cells.get(i))
            .map(Vec::as_slice)
    }

    /// Link table of dimension `k`, `0 <= k < dim()`: for each k-cell, the
    /// (k+1)-cells containing it.
    #[inline]
    pub fn links(&self, k: usize) -> &[Link] {
        &self.links[k]
    }

    /// Iterator over `(k, cells)` from dimension 1 upwards.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &[Cell])> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cells)| (i + 1, cells.as_slice()))
    }

    /// Total number of boundary references over all levels.
    pub fn incidence_count(&self) -> usize {
        self.cells.iter().flatten().map(|c| c.len()).sum()
    }

    /// The sub-table of dimension `j <= dim()`. The link table of level `j`
    /// goes away with the cells above it.
    ///
    /// # Errors
    /// [`MeshError::InvalidDimension`] if `j > dim()`.
    pub fn truncated(&self, j: usize) -> Result<Grid, MeshError> {
        if j > self.dim() {
            return Err(MeshError::InvalidDimension {
                dim: j,
                max: self.dim(),
            });
        }
        Ok(self.prefix(j))
    }

    /// [`Grid::truncated`] for `j <= dim()` known in advance.
    pub(crate) fn prefix(&self, j: usize) -> Grid {
        // links(k) depends only on cells(k + 1), so the kept prefix is exact.
        Grid {
            vertex_count: self.vertex_count,
            cells: self.cells[..j].to_vec(),
            links: self.links[..j].to_vec(),
        }
    }

    /// Replaces the cells of dimension `k` and re-derives the affected links
    /// (`links(k - 1)` and `links(k)`).
    ///
    /// # Errors
    /// * [`MeshError::InvalidDimension`] if `k` is not in `1..=dim()`.
    /// * Any validation error of the new level, or of level `k + 1` against
    ///   the new number of k-cells.
    pub fn try_set_cells(&mut self, k: usize, cells: Vec<Cell>) -> Result<(), MeshError> {
        if k == 0 || k > self.dim() {
            return Err(MeshError::InvalidDimension {
                dim: k,
                max: self.dim(),
            });
        }
        validate_level(k, &cells, self.len(k - 1))?;
        if let Some(upper) = self.get_cells(k + 1) {
            validate_level(k + 1, upper, cells.len())?;
        }
        self.links[k - 1] = derive_links(self.len(k - 1), &cells);
        self.cells[k - 1] = cells;
        if k < self.dim() {
            self.links[k] = derive_links(self.len(k), &self.cells[k]);
        }
        log::trace!("grid level {k} replaced ({} cells)", self.len(k));
        Ok(())
    }
}

impl DebugInvariants for Grid {
    /// Every index is in range and every link table equals the inverse of the
    /// level above it.
    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.links.len() != self.cells.len() {
            return Err(MeshError::InvalidDimension {
                dim: self.links.len(),
                max: self.cells.len(),
            });
        }
        for (k, cells) in self.levels() {
            validate_level(k, cells, self.len(k - 1))?;
            let expected = derive_links(self.len(k - 1), cells);
            let found = &self.links[k - 1];
            if found.len() != expected.len() {
                return Err(MeshError::LinkMismatch {
                    dim: k - 1,
                    index: found.len().min(expected.len()),
                });
            }
            if let Some(index) = (0..expected.len()).find(|&i| found[i] != expected[i]) {
                return Err(MeshError::LinkMismatch { dim: k - 1, index });
            }
        }
        Ok(())
    }
}
