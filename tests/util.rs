#![allow(dead_code)]
use mesh_hyperslice::{
    geometry::Vector,
    topology::{Cell, Mesh},
};

/// Corners of the cube `[-1, 1]^3`; bit 0 of the index is z, bit 2 is x.
pub fn cube_vertices() -> Vec<Vector<3>> {
    (0..8)
        .map(|i: usize| {
            let s = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
            Vector::new([s(2), s(1), s(0)])
        })
        .collect()
}

pub fn cells<const K: usize>(items: &[[usize; K]]) -> Vec<Cell> {
    items.iter().map(|c| Cell::from(*c)).collect()
}

pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1], [0, 2], [0, 4], [1, 3], [1, 5], [2, 3],
    [2, 6], [3, 7], [4, 5], [4, 6], [5, 7], [6, 7],
];

pub const CUBE_QUADS: [[usize; 4]; 6] = [
    [6, 11, 5, 7], [8, 10, 9, 11],
    [3, 7, 4, 10], [1, 6, 2, 9],
    [2, 8, 0, 4], [0, 3, 1, 5],
];

/// The cube surface: 8 vertices, 12 edges, 6 squares.
pub fn cube_surface() -> Mesh<3> {
    Mesh::try_new(cube_vertices(), [cells(&CUBE_EDGES), cells(&CUBE_QUADS)]).unwrap()
}

/// The solid cube: 8 vertices, 12 edges, 6 squares, 1 body.
pub fn cube_solid() -> Mesh<3> {
    Mesh::try_new(
        cube_vertices(),
        [
            cells(&CUBE_EDGES),
            cells(&CUBE_QUADS),
            vec![Cell::from([0, 1, 2, 3, 4, 5])],
        ],
    )
    .unwrap()
}

/// The cube split into six tetrahedra around the diagonal 0-7.
pub fn cube_simplices() -> Mesh<3> {
    let edges = cells(&[
        [0, 1], [0, 2], [0, 4], [1, 3], [1, 5], [2, 3],
        [2, 6], [3, 7], [4, 5], [4, 6], [5, 7], [6, 7],
        [0, 3], [0, 5], [0, 6], [1, 7], [2, 7], [4, 7], [0, 7],
    ]);
    let faces = cells(&[
        [6, 11, 16], [8, 10, 17], [9, 11, 17],
        [3, 7, 15], [4, 10, 15], [5, 7, 16],
        [1, 6, 14], [2, 8, 13], [2, 9, 14],
        [0, 3, 12], [0, 4, 13], [1, 5, 12],
        [0, 15, 18], [1, 16, 18], [2, 17, 18],
        [7, 12, 18], [11, 14, 18], [10, 13, 18],
    ]);
    let bodies = cells(&[
        [0, 6, 13, 16], [2, 8, 14, 16],
        [1, 7, 14, 17], [4, 10, 12, 17],
        [3, 9, 12, 15], [5, 11, 13, 15],
    ]);
    Mesh::try_new(cube_vertices(), [edges, faces, bodies]).unwrap()
}

/// Reverse incidence computed the slow way: `link[i]` lists every cell
/// containing `i`, in cell order.
pub fn naive_links(lower_len: usize, cells: &[Cell]) -> Vec<Vec<usize>> {
    (0..lower_len)
        .map(|i| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, c)| c.contains(&i))
                .map(|(c, _)| c)
                .collect()
        })
        .collect()
}

/// Cell counts per dimension, vertices first.
pub fn counts<const N: usize>(mesh: &Mesh<N>) -> Vec<usize> {
    (0..=mesh.dim()).map(|k| mesh.grid().len(k)).collect()
}

pub fn assert_close<const N: usize>(a: &Vector<N>, b: &Vector<N>) {
    assert!((*a - *b).len() < 1e-12, "{a:?} != {b:?}");
}
