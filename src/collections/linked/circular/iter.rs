use std::iter::FusedIterator;

use super::{CircularList, RingState};
use crate::collections::linked::node::{NodeArena, NodeIndex};

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        match self.state {
            RingState::Empty => Iter {
                nodes: &self.nodes,
                next: None,
                remaining: 0,
            },
            RingState::Full { cursor, len } => Iter {
                nodes: &self.nodes,
                next: Some(cursor),
                remaining: len,
            },
        }
    }
}

/// A type for borrowed iteration over a [`CircularList`]. Produces values of type `&T`.
///
/// Starts at the cursor and yields exactly [`len`](CircularList::len) elements, following the
/// ring forwards.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a NodeArena<T>,
    pub(crate) next: Option<NodeIndex>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.next?;
        self.remaining -= 1;
        self.next = Some(self.nodes.next(node));
        Some(self.nodes.value(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            ring: self,
        }
    }
}

/// A type for owned iteration over a [`CircularList`], starting at the cursor. Produces values of
/// type `T`.
pub struct IntoIter<T> {
    pub(crate) ring: CircularList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Popping moves the cursor forwards, so this yields the ring in order.
        self.ring.pop_at().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
