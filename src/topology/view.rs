//! Lightweight proxies over a mesh.
//!
//! A [`CellRef`] names one entry of a [`Mesh`] by `(dim, id)` and borrows the
//! mesh; it never copies cell data. Iterating a proxy walks its boundary one
//! dimension down, and [`CellRef::link`] walks the cells one dimension up.

use crate::geometry::Vector;
use crate::topology::mesh::Mesh;
use itertools::Itertools;
use std::fmt;

/// Proxy for the entry `id` at dimension `dim` of a mesh.
#[derive(Clone, Copy)]
pub struct CellRef<'a, const N: usize> {
    mesh: &'a Mesh<N>,
    dim: usize,
    id: usize,
}

impl<'a, const N: usize> CellRef<'a, N> {
    pub(crate) fn new(mesh: &'a Mesh<N>, dim: usize, id: usize) -> Self {
        Self { mesh, dim, id }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn mesh(&self) -> &'a Mesh<N> {
        self.mesh
    }

    /// Boundary indices (into dimension `dim - 1`); empty for a vertex.
    pub fn item(&self) -> &'a [usize] {
        if self.dim == 0 {
            &[]
        } else {
            &self.mesh.cell(self.dim)[self.id]
        }
    }

    /// Position of a vertex; `None` for higher cells.
    pub fn point(&self) -> Option<&'a Vector<N>> {
        (self.dim == 0).then(|| &self.mesh.vert()[self.id])
    }

    /// Cells one dimension up that contain this one. Empty at the top
    /// dimension.
    pub fn link(&self) -> Neighbors<'a, N> {
        let ids: &'a [usize] = if self.dim < self.mesh.dim() {
            &self.mesh.link(self.dim)[self.id]
        } else {
            &[]
        };
        Neighbors {
            mesh: self.mesh,
            dim: self.dim + 1,
            ids: ids.iter(),
        }
    }

    /// Cells one dimension down on the boundary of this one.
    pub fn boundary(&self) -> Neighbors<'a, N> {
        Neighbors {
            mesh: self.mesh,
            dim: self.dim.saturating_sub(1),
            ids: self.item().iter(),
        }
    }

    /// Sorted ids of every vertex in the closure of this cell.
    pub fn vertex_ids(&self) -> Vec<usize> {
        if self.dim == 0 {
            return vec![self.id];
        }
        let mut ids = self.item().to_vec();
        for k in (1..self.dim).rev() {
            let level = self.mesh.cell(k);
            ids = ids
                .into_iter()
                .flat_map(|c| level[c].iter().copied())
                .collect();
        }
        ids.into_iter().sorted_unstable().dedup().collect()
    }

    /// Positions of [`CellRef::vertex_ids`].
    pub fn points(&self) -> impl Iterator<Item = &'a Vector<N>> + 'a {
        let vert = self.mesh.vert();
        self.vertex_ids().into_iter().map(move |i| &vert[i])
    }
}

impl<'a, const N: usize> IntoIterator for CellRef<'a, N> {
    type Item = CellRef<'a, N>;
    type IntoIter = Neighbors<'a, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.boundary()
    }
}

impl<const N: usize> PartialEq for CellRef<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.mesh, other.mesh) && self.dim == other.dim && self.id == other.id
    }
}

impl<const N: usize> fmt::Debug for CellRef<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CellRef");
        s.field("dim", &self.dim).field("id", &self.id);
        match self.point() {
            Some(p) => s.field("point", p),
            None => s.field("item", &self.item()),
        };
        s.finish()
    }
}

/// Iterator of proxies one dimension away from a cell.
#[derive(Clone)]
pub struct Neighbors<'a, const N: usize> {
    mesh: &'a Mesh<N>,
    dim: usize,
    ids: std::slice::Iter<'a, usize>,
}

impl<'a, const N: usize> Iterator for Neighbors<'a, N> {
    type Item = CellRef<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| CellRef::new(self.mesh, self.dim, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<const N: usize> ExactSizeIterator for Neighbors<'_, N> {}
