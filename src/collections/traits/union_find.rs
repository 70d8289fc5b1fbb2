#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// The dynamic connectivity interface: a universe of `n` sites, numbered `0..n`, partitioned into
/// disjoint components which can be merged but never split.
///
/// "Is connected to" is an equivalence relation: reflexive, symmetric and transitive. Each
/// component is identified by a representative site, returned by [`find`](UnionFind::find), so
/// two sites are connected exactly when they share a representative. Which site represents a
/// component is an implementation detail and may change as components are merged.
///
/// Implementors provide [`try_find`](UnionFind::try_find) and
/// [`try_union`](UnionFind::try_union); the remaining methods are derived from those. Every
/// method comes in a `try_` form returning [`IndexOutOfBounds`] for a site outside `0..n`, and a
/// form which panics instead.
pub trait UnionFind {
    /// Creates a universe of `n` sites, each in a component of its own.
    fn new(n: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of sites.
    fn len(&self) -> usize;

    /// Returns true if there are no sites.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of components.
    fn count(&self) -> usize;

    /// Returns the representative of the component containing `site`.
    ///
    /// This takes `&mut self` so that implementations may restructure their internals while
    /// searching, without affecting which sites are connected.
    fn try_find(&mut self, site: usize) -> Result<usize, IndexOutOfBounds>;

    /// Merges the components containing `p` and `q`, returning true if they were previously
    /// disjoint. Merging two connected sites changes nothing.
    fn try_union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfBounds>;

    /// Returns true if `p` and `q` are in the same component.
    fn try_connected(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfBounds> {
        Ok(self.try_find(p)? == self.try_find(q)?)
    }

    /// Returns the representative of the component containing `site`.
    ///
    /// # Panics
    /// Panics if `site` is out of bounds.
    fn find(&mut self, site: usize) -> usize {
        self.try_find(site).throw()
    }

    /// Merges the components containing `p` and `q`, returning true if they were previously
    /// disjoint.
    ///
    /// # Panics
    /// Panics if `p` or `q` is out of bounds.
    fn union(&mut self, p: usize, q: usize) -> bool {
        self.try_union(p, q).throw()
    }

    /// Returns true if `p` and `q` are in the same component.
    ///
    /// # Panics
    /// Panics if `p` or `q` is out of bounds.
    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.try_connected(p, q).throw()
    }
}

/// Returns `site` if it is a valid index into `sites`.
pub(crate) const fn check_site(sites: &[usize], site: usize) -> Result<usize, IndexOutOfBounds> {
    if site < sites.len() {
        Ok(site)
    } else {
        Err(IndexOutOfBounds {
            index: site,
            len: sites.len(),
        })
    }
}
