use crate::collections::traits::UnionFind;
use crate::collections::traits::union_find::{IndexOutOfBounds, check_site};

/// A forest of parent pointers, where each tree is a component and its root is the
/// representative.
///
/// # Time Complexity
/// For this analysis of time complexity, `h` is the height of the tree containing the site(s).
///
/// | Method | Complexity |
/// |-|-|
/// | `find` | `O(h)` |
/// | `union` | `O(h)` |
///
/// Nothing limits the height of a tree, so in the worst case (e.g. unioning `0-1`, `1-2`, `2-3`,
/// ...) a tree degenerates into a chain and `h` is `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickUnion {
    pub(crate) parent: Vec<usize>,
    pub(crate) count: usize,
}

impl QuickUnion {
    /// Returns the parent of every site, indexed by site. Roots are their own parent.
    pub fn ids(&self) -> &[usize] {
        &self.parent
    }
}

impl UnionFind for QuickUnion {
    fn new(n: usize) -> QuickUnion {
        QuickUnion {
            parent: (0..n).collect(),
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

    /// Attaches the root of `p`'s tree under the root of `q`'s tree.
    fn try_union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfBounds> {
        let p_root = self.try_find(p)?;
        let q_root = self.try_find(q)?;
        if p_root == q_root {
            return Ok(false);
        }

        self.parent[p_root] = q_root;
        self.count -= 1;
        Ok(true)
    }
}
