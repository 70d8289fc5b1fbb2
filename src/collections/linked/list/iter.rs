use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::DoublyLinkedList;
use crate::collections::linked::node::{NodeArena, NodeIndex, RawArena};

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// A type for owned iteration over a [`DoublyLinkedList`]. Produces values of type `T`.
pub struct IntoIter<T> {
    // The iterator just holds the list and pops from either end.
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            front: self.first_node(),
            back: self.last_node(),
            len: self.len,
        }
    }
}

/// A type for borrowed iteration over a [`DoublyLinkedList`]. Produces values of type `&T`.
///
/// Iteration is restartable: every call to [`DoublyLinkedList::iter`] begins again at the front.
pub struct Iter<'a, T> {
    // `len` counts the items left to yield, so front and back never need to be compared.
    pub(crate) nodes: &'a NodeArena<T>,
    pub(crate) front: NodeIndex,
    pub(crate) back: NodeIndex,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let value = self.nodes.value(self.front);
        self.front = self.nodes.next(self.front);
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let value = self.nodes.value(self.back);
        self.back = self.nodes.prev(self.back);
        self.len -= 1;
        Some(value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            front: self.first_node(),
            back: self.last_node(),
            len: self.len,
            nodes: self.nodes.as_raw(),
            _phantom: PhantomData,
        }
    }
}

/// A type for mutable borrowed iteration over a [`DoublyLinkedList`]. Produces values of type
/// `&mut T`.
pub struct IterMut<'a, T> {
    pub(crate) nodes: RawArena<T>,
    pub(crate) front: NodeIndex,
    pub(crate) back: NodeIndex,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: The iterator holds the list's only mutable borrow for 'a and yields each of the
        // remaining `len` nodes at most once, from either end.
        let node = unsafe { self.nodes.node_mut(self.front) };
        if let Some(next) = node.next {
            self.front = next;
        }
        self.len -= 1;
        node.value.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: See IterMut::next.
        let node = unsafe { self.nodes.node_mut(self.back) };
        if let Some(prev) = node.prev {
            self.back = prev;
        }
        self.len -= 1;
        node.value.as_mut()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
