//! Side-of-hyperplane classification of a mesh.
//!
//! Every vertex gets a signed distance `p = (v - center) · normal` and a
//! [`Side`]; every cell then gets a [`CellState`] derived bottom-up from the
//! states of its boundary cells. The cut engine in [`crate::algs::slice`]
//! consumes the result level by level.

use crate::geometry::Vector;
use crate::mesh_error::MeshError;
use crate::topology::cell::Cell;
use crate::topology::mesh::Mesh;
use std::ops::Neg;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Position of a vertex relative to the hyperplane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// `p < 0`
    Lower,
    /// `|p| <= tolerance`
    OnPlane,
    /// `p > 0`
    Upper,
}

impl Side {
    /// Side of a signed distance under `tolerance`.
    #[inline]
    pub fn from_distance(p: f64, tolerance: f64) -> Self {
        if p.abs() <= tolerance {
            Side::OnPlane
        } else if p < 0.0 {
            Side::Lower
        } else {
            Side::Upper
        }
    }
}

impl Neg for Side {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Side::Lower => Side::Upper,
            Side::OnPlane => Side::OnPlane,
            Side::Upper => Side::Lower,
        }
    }
}

/// Position of a cell relative to the hyperplane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Entirely below; discarded by clipping.
    Lower,
    /// Entirely above, possibly touching the plane.
    Upper,
    /// Lies in the plane.
    Inner,
    /// Has points strictly on both sides.
    Cross,
}

impl CellState {
    /// State of a cell from the states of its boundary cells.
    ///
    /// All `Inner` (or no children) gives `Inner`; a `Cross` child or both
    /// `Lower` and `Upper` children give `Cross`; otherwise the one side seen.
    pub fn from_children<I>(children: I) -> Self
    where
        I: IntoIterator<Item = CellState>,
    {
        let (mut lower, mut upper) = (false, false);
        for state in children {
            match state {
                CellState::Cross => return CellState::Cross,
                CellState::Lower => lower = true,
                CellState::Upper => upper = true,
                CellState::Inner => {}
            }
        }
        match (lower, upper) {
            (true, true) => CellState::Cross,
            (true, false) => CellState::Lower,
            (false, true) => CellState::Upper,
            (false, false) => CellState::Inner,
        }
    }

    /// True for `Upper`, `Inner` and `Cross`: the cell survives clipping,
    /// at least in part.
    #[inline]
    pub fn is_kept(self) -> bool {
        self != CellState::Lower
    }
}

impl From<Side> for CellState {
    fn from(side: Side) -> Self {
        match side {
            Side::Lower => CellState::Lower,
            Side::OnPlane => CellState::Inner,
            Side::Upper => CellState::Upper,
        }
    }
}

impl Neg for CellState {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            CellState::Lower => CellState::Upper,
            CellState::Upper => CellState::Lower,
            other => other,
        }
    }
}

/// Options for classification and the cuts built on it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliceOptions {
    tolerance: f64,
}

impl SliceOptions {
    /// Exact comparison: only `p == 0` is on the plane.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Vertices with `|p| <= tolerance` count as on the plane.
    ///
    /// # Errors
    /// [`MeshError::InvalidTolerance`] if `tolerance` is negative or not finite.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, MeshError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(MeshError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Per-vertex distances and sides plus per-level cell states.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    distances: Vec<f64>,
    sides: Vec<Side>,
    /// `states[k]`: states of the entries at dimension `k`.
    states: Vec<Vec<CellState>>,
}

impl Classification {
    /// Signed distance of every vertex, in the units of `normal`.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// States at dimension `k`, `0 <= k <= dim()`.
    pub fn states(&self, k: usize) -> &[CellState] {
        &self.states[k]
    }

    /// Top dimension of the classified mesh.
    pub fn dim(&self) -> usize {
        self.states.len() - 1
    }

    /// Number of entries at dimension `k` in `state`.
    pub fn count(&self, k: usize, state: CellState) -> usize {
        self.states[k].iter().filter(|&&s| s == state).count()
    }
}

/// Classifies every vertex and cell of `mesh` against the hyperplane through
/// `center` with normal `normal` (need not be unit length).
pub fn classify<const N: usize>(
    mesh: &Mesh<N>,
    center: &Vector<N>,
    normal: &Vector<N>,
    options: &SliceOptions,
) -> Classification {
    let tolerance = options.tolerance();
    let distances = signed_distances(mesh.vert(), center, normal);
    let sides: Vec<Side> = distances
        .iter()
        .map(|&p| Side::from_distance(p, tolerance))
        .collect();

    let mut states = Vec::with_capacity(mesh.dim() + 1);
    states.push(sides.iter().copied().map(CellState::from).collect::<Vec<_>>());
    for k in 1..=mesh.dim() {
        let level = level_states(mesh.cell(k), &states[k - 1]);
        states.push(level);
    }

    let classification = Classification {
        distances,
        sides,
        states,
    };
    log::trace!(
        "classified {} vertices: {} lower, {} on plane, {} upper",
        classification.sides.len(),
        classification.count(0, CellState::Lower),
        classification.count(0, CellState::Inner),
        classification.count(0, CellState::Upper),
    );
    classification
}

#[cfg(not(feature = "rayon"))]
fn signed_distances<const N: usize>(
    vert: &[Vector<N>],
    center: &Vector<N>,
    normal: &Vector<N>,
) -> Vec<f64> {
    vert.iter().map(|v| (*v - *center).dot(normal)).collect()
}

#[cfg(feature = "rayon")]
fn signed_distances<const N: usize>(
    vert: &[Vector<N>],
    center: &Vector<N>,
    normal: &Vector<N>,
) -> Vec<f64> {
    vert.par_iter().map(|v| (*v - *center).dot(normal)).collect()
}

#[cfg(not(feature = "rayon"))]
fn level_states(cells: &[Cell], lower: &[CellState]) -> Vec<CellState> {
    cells
        .iter()
        .map(|cell| CellState::from_children(cell.iter().map(|&i| lower[i])))
        .collect()
}

#[cfg(feature = "rayon")]
fn level_states(cells: &[Cell], lower: &[CellState]) -> Vec<CellState> {
    cells
        .par_iter()
        .map(|cell| CellState::from_children(cell.iter().map(|&i| lower[i])))
        .collect()
}
