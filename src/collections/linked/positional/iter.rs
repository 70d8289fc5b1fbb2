use std::iter::FusedIterator;

use super::{Position, PositionalList};
use crate::collections::linked::node::NodeIndex;

/// A type for iterating over the [`Position`]s of a [`PositionalList`], in order.
///
/// See [`PositionalList::positions`].
pub struct Positions<'a, T> {
    pub(crate) list: &'a PositionalList<T>,
    pub(crate) front: NodeIndex,
    pub(crate) back: NodeIndex,
    pub(crate) len: usize,
}

impl<T> Iterator for Positions<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let pos = self.list.wrap(self.front);
        self.front = self.list.inner.nodes.next(self.front);
        self.len -= 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Positions<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let pos = self.list.wrap(self.back);
        self.back = self.list.inner.nodes.prev(self.back);
        self.len -= 1;
        Some(pos)
    }
}

impl<T> FusedIterator for Positions<'_, T> {}

impl<T> ExactSizeIterator for Positions<'_, T> {}
