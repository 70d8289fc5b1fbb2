use crate::collections::traits::UnionFind;
use crate::collections::traits::union_find::{IndexOutOfBounds, check_site};

/// A [`QuickUnion`](super::QuickUnion) which keeps its trees balanced by always attaching the
/// smaller tree under the root of the larger one.
///
/// A site's depth only increases when its tree is attached under a tree at least as large, which
/// at least doubles the size of the tree containing it. That can happen at most `log₂(n)` times,
/// so no tree is ever taller than `log₂(n)`.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `find` | `O(log n)` |
/// | `union` | `O(log n)` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedQuickUnion {
    pub(crate) parent: Vec<usize>,
    pub(crate) size: Vec<usize>,
    pub(crate) count: usize,
}

impl WeightedQuickUnion {
    /// Returns the parent of every site, indexed by site. Roots are their own parent.
    pub fn ids(&self) -> &[usize] {
        &self.parent
    }

    /// Returns the number of sites in the tree rooted at each site. Only the entries for roots are
    /// meaningful.
    pub fn sizes(&self) -> &[usize] {
        &self.size
    }
}

impl UnionFind for WeightedQuickUnion {
    fn new(n: usize) -> WeightedQuickUnion {
        WeightedQuickUnion {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn try_find(&mut self, site: usize) -> Result<usize, IndexOutOfBounds> {
        let mut site = check_site(&self.parent, site)?;
        while site != self.parent[site] {
            site = self.parent[site];
        }
        Ok(site)
    }

    fn try_union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfBounds> {
        let p_root = self.try_find(p)?;
        let q_root = self.try_find(q)?;
        if p_root == q_root {
            return Ok(false);
        }

        link_by_size(&mut self.parent, &mut self.size, p_root, q_root);
        self.count -= 1;
        Ok(true)
    }
}

/// Attaches the root of the smaller tree under the root of the larger one and updates the
/// surviving root's size. On a tie, `p_root` goes under `q_root`.
pub(crate) fn link_by_size(parent: &mut [usize], size: &mut [usize], p_root: usize, q_root: usize) {
    if size[p_root] > size[q_root] {
        parent[q_root] = p_root;
        size[p_root] += size[q_root];
    } else {
        parent[p_root] = q_root;
        size[q_root] += size[p_root];
    }
}
