//! Axis-aligned hyper-rectangle generator.
//!
//! Vertex `i` of an N-box takes `max[d]` on every axis `d` whose bit is set
//! in `i`, `min[d]` elsewhere. A k-face is keyed by its lowest vertex and the
//! set of its `k` free axes; its boundary consists of the two (k-1)-faces
//! obtained by pinning each free axis at either end.

use crate::geometry::Vector;
use crate::topology::cell::Cell;
use crate::topology::grid::Grid;
use crate::topology::mesh::Mesh;
use std::collections::HashMap;

/// Full cell complex of the box `[min, max]`, with every level `1..=N`.
///
/// Level `k` holds `C(N, k) * 2^(N - k)` cells, grouped by free-axis set.
pub fn hyperrect<const N: usize>(min: &Vector<N>, max: &Vector<N>) -> Mesh<N> {
    let corners = 1usize << N;
    let vert: Vec<Vector<N>> = (0..corners)
        .map(|i| {
            Vector::new(std::array::from_fn(|d| {
                if i & (1usize << d) != 0 { max[d] } else { min[d] }
            }))
        })
        .collect();

    let mut levels: Vec<Vec<Cell>> = Vec::with_capacity(N);
    let mut lower: HashMap<(usize, usize), usize> = (0..corners).map(|i| ((i, 0), i)).collect();
    for k in 1..=N {
        let mut ids = HashMap::new();
        let mut cells = Vec::new();
        for mask in (0..corners).filter(|&m| m.count_ones() as usize == k) {
            for base in (0..corners).filter(|&b| b & mask == 0) {
                let cell: Cell = (0..N)
                    .filter(|&a| mask & (1usize << a) != 0)
                    .flat_map(|a| {
                        let sub = mask & !(1usize << a);
                        [(base, sub), (base | (1usize << a), sub)]
                    })
                    .map(|key| lower[&key])
                    .collect();
                ids.insert((base, mask), cells.len());
                cells.push(cell);
            }
        }
        levels.push(cells);
        lower = ids;
    }

    log::trace!(
        "hyperrect<{N}>: cells per level {:?}",
        levels.iter().map(Vec::len).collect::<Vec<_>>()
    );
    let grid = Grid::from_cells_unchecked(vert.len(), levels);
    Mesh::from_parts(vert, grid)
}
