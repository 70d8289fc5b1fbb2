use crate::collections::traits::UnionFind;
use crate::collections::traits::union_find::{IndexOutOfBounds, check_site};

/// The naive, array-based disjoint set: every site stores the id of its component directly.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `find` | `O(1)` |
/// | `union` | `O(n)` |
///
/// Finding is a single lookup, but a union has to relabel every site of one component, so
/// building up components from `n` singletons takes `O(n²)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFind {
    pub(crate) id: Vec<usize>,
    pub(crate) count: usize,
}

impl QuickFind {
    /// Returns the component id of every site, indexed by site.
    pub fn ids(&self) -> &[usize] {
        &self.id
    }
}

impl UnionFind for QuickFind {
    fn new(n: usize) -> QuickFind {
        QuickFind {
            id: (0..n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn try_find(&mut self, site: usize) -> Result<usize, IndexOutOfBounds> {
        Ok(self.id[check_site(&self.id, site)?])
    }

    /// Relabels every site in `p`'s component with the id of `q`'s component.
    fn try_union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfBounds> {
        let p_id = self.try_find(p)?;
        let q_id = self.try_find(q)?;
        if p_id == q_id {
            return Ok(false);
        }

        for id in self.id.iter_mut().filter(|id| **id == p_id) {
            *id = q_id;
        }
        self.count -= 1;
        Ok(true)
    }
}
