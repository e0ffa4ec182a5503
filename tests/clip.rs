//! Half-space clipping.

mod util;

use mesh_hyperslice::algs::{
    CellState, SliceOptions, classify, get_clipped, get_clipped_with, hyperrect,
};
use mesh_hyperslice::geometry::Vector;
use mesh_hyperslice::topology::Cell;
use proptest::prelude::*;
use util::*;

fn z_up() -> Vector<3> {
    Vector::new([0.0, 0.0, 1.0])
}

#[test]
fn clipped_cube_is_a_box() {
    let clipped = get_clipped(&cube_solid(), &Vector::new([0.0; 3]), &z_up());
    assert_eq!(counts(&clipped), vec![8, 12, 6, 1]);
    // surviving corners first, in input order, then the crossing points
    let expected = [1, 3, 5, 7].map(|i| cube_vertices()[i]);
    assert_eq!(&clipped.vert()[..4], &expected);
    assert!(clipped.vert()[4..].iter().all(|v| v[2] == 0.0));
    // a crossing edge keeps its orientation, with the crossing point first
    assert_eq!(clipped.edge()[0], Cell::from([4, 0]));
    // the cap closes the body
    assert_eq!(clipped.face()[5], Cell::from([8, 9, 10, 11]));
    assert!(clipped.link(1).iter().all(|l| l.len() == 2));
}

#[test]
fn upper_mesh_is_unchanged() {
    let mesh = cube_solid();
    let clipped = get_clipped(&mesh, &Vector::new([0.0, 0.0, -3.0]), &z_up());
    assert_eq!(clipped.vert(), mesh.vert());
    assert_eq!(clipped.grid(), mesh.grid());
    assert!(!clipped.shares_vertices(&mesh));
}

#[test]
fn lower_mesh_vanishes() {
    let clipped = get_clipped(&cube_solid(), &Vector::new([0.0, 0.0, 3.0]), &z_up());
    assert_eq!(counts(&clipped), vec![0, 0, 0, 0]);
}

#[test]
fn clipping_twice_is_clipping_once() {
    let origin = Vector::new([0.0; 3]);
    for mesh in [cube_solid(), cube_simplices(), cube_surface()] {
        let once = get_clipped(&mesh, &origin, &z_up());
        let twice = get_clipped(&once, &origin, &z_up());
        assert_eq!(once.vert(), twice.vert());
        assert_eq!(once.grid(), twice.grid());
    }
}

#[test]
fn simplex_cube_clip_counts() {
    let clipped = get_clipped(&cube_simplices(), &Vector::new([0.0; 3]), &z_up());
    // four upper corners and nine crossing points
    assert_eq!(counts(&clipped), vec![13, 28, 22, 6]);
}

#[test]
fn clip_along_cube_edges_adds_no_vertices() {
    let n = Vector::new([1.0, 1.0, 0.0]);
    let clipped = get_clipped(&cube_solid(), &Vector::new([0.0; 3]), &n);
    assert_eq!(counts(&clipped), vec![6, 9, 5, 1]);
    let expected = [2, 3, 4, 5, 6, 7].map(|i| cube_vertices()[i]);
    assert_eq!(clipped.vert(), &expected);
}

#[test]
fn tolerance_turns_crossing_into_touching() {
    let mesh = cube_solid();
    let c = Vector::new([0.0, 0.0, 1.0 - 1e-9]);
    let exact = get_clipped(&mesh, &c, &z_up());
    assert_eq!(counts(&exact), vec![8, 12, 6, 1]);
    let loose = SliceOptions::with_tolerance(1e-6).unwrap();
    let touching = get_clipped_with(&mesh, &c, &z_up(), &loose);
    // only the top square is left
    assert_eq!(counts(&touching), vec![4, 4, 1, 0]);
}

#[test]
fn tesseract_clip_keeps_its_shape() {
    let tess = hyperrect(&Vector::splat(-1.0), &Vector::<4>::splat(1.0));
    let w = Vector::new([0.0, 0.0, 0.0, 1.0]);
    let half = get_clipped(&tess, &Vector::splat(0.0), &w);
    assert_eq!(counts(&half), vec![16, 32, 24, 8, 1]);
}

proptest! {
    #[test]
    fn flipping_the_normal_swaps_sides(
        c in prop::array::uniform3(-1.5f64..1.5),
        n in prop::array::uniform3(-1.0f64..1.0),
    ) {
        let mesh = cube_simplices();
        let (c, n) = (Vector::new(c), Vector::new(n));
        let up = classify(&mesh, &c, &n, &SliceOptions::default());
        let down = classify(&mesh, &c, &-n, &SliceOptions::default());
        for k in 0..=mesh.dim() {
            for (a, b) in up.states(k).iter().zip(down.states(k)) {
                prop_assert_eq!(*b, -*a);
                if matches!(a, CellState::Inner | CellState::Cross) {
                    prop_assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn both_halves_share_the_section(
        c in prop::array::uniform3(-0.9f64..0.9),
        n in prop::array::uniform3(-1.0f64..1.0),
    ) {
        let (c, n) = (Vector::new(c), Vector::new(n));
        prop_assume!(n.len() > 1e-3);
        let mesh = cube_solid();
        let upper = get_clipped(&mesh, &c, &n);
        let lower = get_clipped(&mesh, &c, &-n);
        prop_assert_eq!(upper.dim(), 3);
        prop_assert_eq!(upper.body().len(), 1);
        prop_assert_eq!(lower.body().len(), 1);
        // crossing points and crossing faces show up in both halves, and
        // each half gets its own cap
        let split = classify(&mesh, &c, &n, &SliceOptions::default());
        let cross_edges = split.count(1, CellState::Cross);
        let cross_faces = split.count(2, CellState::Cross);
        prop_assert_eq!(upper.vert().len() + lower.vert().len(), 8 + 2 * cross_edges);
        prop_assert_eq!(upper.face().len() + lower.face().len(), 6 + cross_faces + 2);
    }
}
