use super::weighted_quick_union::link_by_size;
use crate::collections::traits::UnionFind;
use crate::collections::traits::union_find::{IndexOutOfBounds, check_site};

/// A [`WeightedQuickUnion`](super::WeightedQuickUnion) which also flattens its trees as it
/// searches them.
///
/// Every step of a find points the current site at its grandparent before moving on (path
/// halving), so repeated searches through the same sites get shorter. Combined with union by size,
/// the amortized cost of each operation is `O(α(n))`, where `α` is the inverse Ackermann
/// function: effectively constant.
///
/// # Time Complexity
/// | Method | Complexity (amortized) |
/// |-|-|
/// | `find` | `O(α(n))` |
/// | `union` | `O(α(n))` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedQuickUnionPathCompression {
    pub(crate) parent: Vec<usize>,
    pub(crate) size: Vec<usize>,
    pub(crate) count: usize,
}

impl WeightedQuickUnionPathCompression {
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

impl UnionFind for WeightedQuickUnionPathCompression {
    fn new(n: usize) -> WeightedQuickUnionPathCompression {
        WeightedQuickUnionPathCompression {
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
            self.parent[site] = self.parent[self.parent[site]];
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
