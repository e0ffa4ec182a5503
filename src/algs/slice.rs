//! Hyperplane cuts: clipping and cross sections.
//!
//! Both outputs come from one bottom-up pass over the classified mesh. For
//! every level `k` and every input k-cell the pass records
//!
//! * the id of the cell's surviving part in the clipped complex (none for
//!   `Lower` cells), and
//! * the id of its *fragment*: the (k-1)-cell of the clipped complex where
//!   the cell meets the hyperplane. A crossing edge yields a new vertex, a
//!   crossing k-cell yields a new (k-1)-cell over the deduplicated fragments
//!   of its children, and a one-sided cell touching the plane with a whole
//!   boundary cell yields that boundary cell.
//!
//! A crossing cell keeps its non-`Lower` children, the clipped parts of its
//! crossing children, and its fragment as a cap. Every entry of the clipped
//! complex carries an on-plane flag; the section is the on-plane
//! subcomplex, renumbered and mapped into hyperplane coordinates.

use crate::algs::classify::{CellState, Classification, SliceOptions, classify};
use crate::geometry::{Basis, Vector};
use crate::topology::cell::Cell;
use crate::topology::grid::Grid;
use crate::topology::mesh::Mesh;
use itertools::Itertools;

/// Clipped complex in ambient coordinates with on-plane flags.
struct Cut<const N: usize> {
    vert: Vec<Vector<N>>,
    vert_on_plane: Vec<bool>,
    /// `cells[k - 1]`: cells of dimension `k`.
    cells: Vec<Vec<Cell>>,
    on_plane: Vec<Vec<bool>>,
}

impl<const N: usize> Cut<N> {
    fn push_vertex(&mut self, v: Vector<N>, on_plane: bool) -> usize {
        self.vert.push(v);
        self.vert_on_plane.push(on_plane);
        self.vert.len() - 1
    }

    fn push_cell(&mut self, k: usize, cell: Cell, on_plane: bool) -> usize {
        self.cells[k - 1].push(cell);
        self.on_plane[k - 1].push(on_plane);
        self.cells[k - 1].len() - 1
    }
}

fn cut<const N: usize>(mesh: &Mesh<N>, classification: &Classification) -> Cut<N> {
    let dim = mesh.dim();
    let mut out = Cut {
        vert: Vec::with_capacity(mesh.vert().len()),
        vert_on_plane: Vec::with_capacity(mesh.vert().len()),
        cells: vec![Vec::new(); dim],
        on_plane: vec![Vec::new(); dim],
    };

    // Ids in the clipped complex of the level below.
    let mut lower_kept: Vec<Option<usize>> = Vec::with_capacity(mesh.vert().len());
    for (v, &state) in mesh.vert().iter().zip(classification.states(0)) {
        lower_kept.push(
            state
                .is_kept()
                .then(|| out.push_vertex(*v, state == CellState::Inner)),
        );
    }
    // Fragments of the level below; vertices have none.
    let mut lower_frag: Vec<Option<usize>> = vec![None; mesh.vert().len()];
    let p = classification.distances();

    for k in 1..=dim {
        let states = classification.states(k);
        let child_states = classification.states(k - 1);
        let cells = mesh.cell(k);
        let mut kept = Vec::with_capacity(cells.len());
        let mut frag = Vec::with_capacity(cells.len());

        for (c, cell) in cells.iter().enumerate() {
            let state = states[c];
            let fragment = match state {
                CellState::Inner => None,
                CellState::Lower | CellState::Upper => cell
                    .iter()
                    .find(|&&i| child_states[i] == CellState::Inner)
                    .and_then(|&i| lower_kept[i]),
                CellState::Cross if k == 1 => {
                    let (a, b) = (cell[0], cell[1]);
                    let t = -p[a] / (p[b] - p[a]);
                    let va = mesh.vert()[a];
                    let x = va + (mesh.vert()[b] - va) * t;
                    Some(out.push_vertex(x, true))
                }
                CellState::Cross => {
                    let children: Vec<usize> =
                        cell.iter().filter_map(|&i| lower_frag[i]).unique().collect();
                    let well_formed = if k == 2 {
                        children.len() == 2
                    } else {
                        children.len() >= 2
                    };
                    if well_formed {
                        Some(out.push_cell(k - 1, Cell::new(children), true))
                    } else {
                        log::debug!(
                            "crossing {k}-cell {c} meets the plane in {} pieces, no fragment",
                            children.len()
                        );
                        None
                    }
                }
            };

            let part = match state {
                CellState::Lower => None,
                CellState::Cross if k == 1 => {
                    // the lower endpoint is replaced by the crossing vertex
                    let ends: Cell = cell
                        .iter()
                        .filter_map(|&i| lower_kept[i].or(fragment))
                        .collect();
                    Some(out.push_cell(1, ends, false))
                }
                CellState::Cross => {
                    let children: Cell = cell
                        .iter()
                        .filter_map(|&i| lower_kept[i])
                        .chain(fragment)
                        .collect();
                    Some(out.push_cell(k, children, false))
                }
                CellState::Upper | CellState::Inner => {
                    let children: Cell = cell.iter().filter_map(|&i| lower_kept[i]).collect();
                    Some(out.push_cell(k, children, state == CellState::Inner))
                }
            };

            kept.push(part);
            frag.push(fragment);
        }

        log::trace!(
            "level {k}: {} kept, {} fragments",
            kept.iter().flatten().count(),
            frag.iter().flatten().count()
        );
        lower_kept = kept;
        lower_frag = frag;
    }
    out
}

/// Upper half (`p >= 0`) of `mesh` cut by the hyperplane through `center`
/// with normal `normal`, in ambient coordinates.
///
/// Vertex order is the surviving input vertices in input order, then the
/// crossing vertices in creation order.
pub fn get_clipped<const N: usize>(
    mesh: &Mesh<N>,
    center: &Vector<N>,
    normal: &Vector<N>,
) -> Mesh<N> {
    get_clipped_with(mesh, center, normal, &SliceOptions::default())
}

/// [`get_clipped`] with explicit options.
pub fn get_clipped_with<const N: usize>(
    mesh: &Mesh<N>,
    center: &Vector<N>,
    normal: &Vector<N>,
    options: &SliceOptions,
) -> Mesh<N> {
    let classification = classify(mesh, center, normal, options);
    let out = cut(mesh, &classification);
    log::debug!(
        "clip: {} -> {} vertices, cells per level {:?}",
        mesh.vert().len(),
        out.vert.len(),
        out.cells.iter().map(Vec::len).collect::<Vec<_>>()
    );
    let grid = Grid::from_cells_unchecked(out.vert.len(), out.cells);
    Mesh::from_parts(out.vert, grid)
}

/// Cross section of `mesh` by `hyperplane`, in hyperplane coordinates.
///
/// Keeps the cells lying in the plane: fragments of crossing cells and
/// cells that were already in it. Trailing empty levels are dropped.
pub fn get_section<const N: usize, const M: usize>(
    mesh: &Mesh<N>,
    hyperplane: &Basis<N, M>,
) -> Mesh<M> {
    get_section_with(mesh, hyperplane, &SliceOptions::default())
}

/// [`get_section`] with explicit options.
pub fn get_section_with<const N: usize, const M: usize>(
    mesh: &Mesh<N>,
    hyperplane: &Basis<N, M>,
    options: &SliceOptions,
) -> Mesh<M> {
    const { assert!(M + 1 == N, "a section lives in a hyperplane of dimension N - 1") };
    let classification = classify(mesh, hyperplane.center(), &hyperplane.normal(), options);
    let out = cut(mesh, &classification);

    let mut lower_map = renumber(&out.vert_on_plane);
    let vert: Vec<Vector<M>> = out
        .vert
        .iter()
        .zip(&out.vert_on_plane)
        .filter(|&(_, &on)| on)
        .map(|(v, _)| hyperplane.put(v))
        .collect();

    let mut levels: Vec<Vec<Cell>> = Vec::with_capacity(out.cells.len());
    for (cells, flags) in out.cells.iter().zip(&out.on_plane) {
        let level = cells
            .iter()
            .zip(flags)
            .filter(|&(_, &on)| on)
            .map(|(cell, _)| cell.iter().filter_map(|&i| lower_map[i]).collect())
            .collect();
        levels.push(level);
        lower_map = renumber(flags);
    }
    while levels.last().is_some_and(Vec::is_empty) {
        levels.pop();
    }
    if levels.len() > M {
        log::debug!("section of a degenerate mesh truncated to dimension {M}");
        levels.truncate(M);
    }

    log::debug!(
        "section: {} vertices, cells per level {:?}",
        vert.len(),
        levels.iter().map(Vec::len).collect::<Vec<_>>()
    );
    let grid = Grid::from_cells_unchecked(vert.len(), levels);
    Mesh::from_parts(vert, grid)
}

/// New ids of the flagged entries, in order.
fn renumber(flags: &[bool]) -> Vec<Option<usize>> {
    let mut next = 0;
    flags
        .iter()
        .map(|&on| {
            on.then(|| {
                next += 1;
                next - 1
            })
        })
        .collect()
}
