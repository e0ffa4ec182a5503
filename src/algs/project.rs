//! Orthogonal projection of a mesh onto a subspace.

use crate::geometry::{Basis, Vector};
use crate::topology::mesh::Mesh;
use std::sync::Arc;

/// Re-expresses every vertex of `mesh` in the coordinates of `subspace`.
///
/// The incidence table is reused as is (the output shares the input's grid)
/// unless the mesh has cells of dimension above `M`, in which case the grid is
/// cut down to dimension `M`.
pub fn get_project<const N: usize, const M: usize>(
    mesh: &Mesh<N>,
    subspace: &Basis<N, M>,
) -> Mesh<M> {
    const { assert!(M <= N, "projection target must not exceed the ambient dimension") };
    let vert: Vec<Vector<M>> = mesh.vert().iter().map(|v| subspace.put(v)).collect();
    let grid = if mesh.dim() <= M {
        Arc::clone(mesh.shared_grid())
    } else {
        log::debug!("projection drops cell levels {}..={}", M + 1, mesh.dim());
        Arc::new(mesh.grid().prefix(M))
    };
    Mesh::from_shared_parts(vert, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::cell::Cell;
    use num_traits::Zero;

    fn tetrahedron() -> Mesh<3> {
        let vert = vec![
            Vector::new([0.0, 0.0, 0.0]),
            Vector::new([1.0, 0.0, 0.0]),
            Vector::new([0.0, 1.0, 0.0]),
            Vector::new([0.0, 0.0, 1.0]),
        ];
        let edges: Vec<Cell> = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]]
            .into_iter()
            .map(Cell::from)
            .collect();
        let faces: Vec<Cell> = [[0, 1, 2], [0, 4, 3], [1, 5, 4], [2, 3, 5]]
            .into_iter()
            .map(Cell::from)
            .collect();
        let bodies: Vec<Cell> = vec![[0, 1, 2, 3].into()];
        Mesh::try_new(vert, [edges, faces, bodies]).unwrap()
    }

    #[test]
    fn projection_shares_the_grid() {
        let mesh = tetrahedron();
        let full = Basis::<3, 3>::identity(Vector::zero());
        let same = get_project(&mesh, &full);
        assert!(Arc::ptr_eq(same.shared_grid(), mesh.shared_grid()));
        assert_eq!(same.vert(), mesh.vert());
    }

    #[test]
    fn projection_onto_plane_truncates_bodies() {
        let mesh = tetrahedron();
        let plane = Basis::<3, 2>::identity(Vector::new([0.0, 0.0, 7.0]));
        let flat = get_project(&mesh, &plane);
        assert_eq!(flat.dim(), 2);
        assert_eq!(flat.edge().len(), 6);
        assert_eq!(flat.face().len(), 4);
        assert_eq!(flat.vert()[3], Vector::new([0.0, 0.0]));
        assert_eq!(flat.link(1), mesh.link(1));
    }
}
