use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{Iter, IterMut};
use crate::collections::linked::node::{Node, NodeArena, NodeIndex};
use crate::util::fmt::write_sequence;
use crate::util::option::OptionExtension;

/// A list with links in both directions, bounded by a header and trailer sentinel.
///
/// The sentinels are allocated with the list and never removed, so every element always has a
/// node before and after it. That makes insertion and deletion uniform: both are a splice between
/// two adjacent nodes, with no special cases for the ends of the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `collect` | `O(n)` |
///
/// Nodes are stored in an arena owned by the list, so a deleted node's storage is reused by the
/// next insertion rather than returned to the allocator.
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: NodeArena<T>,
    pub(crate) header: NodeIndex,
    pub(crate) trailer: NodeIndex,
    pub(crate) len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub fn new() -> DoublyLinkedList<T> {
        let mut nodes = NodeArena::new();
        let header = nodes.insert(Node::sentinel());
        let trailer = nodes.insert(Node::sentinel());
        nodes.node_mut(header).next = Some(trailer);
        nodes.node_mut(trailer).prev = Some(header);

        DoublyLinkedList {
            nodes,
            header,
            trailer,
            len: 0,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.nodes.node(self.first_node()).value.as_ref()
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.first_node();
        self.nodes.node_mut(first).value.as_mut()
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.nodes.node(self.last_node()).value.as_ref()
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.last_node();
        self.nodes.node_mut(last).value.as_mut()
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        self.insert_between(value, self.header, self.first_node());
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        self.insert_between(value, self.last_node(), self.trailer);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.delete_node(self.first_node()))
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.delete_node(self.last_node()))
    }

    /// Removes and drops every element, leaving the sentinels in place.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over references to the elements, from front to back. Use
    /// [`Iterator::rev`] for back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> DoublyLinkedList<T> {
    /// The node after the header: the trailer when empty.
    pub(crate) fn first_node(&self) -> NodeIndex {
        self.nodes.next(self.header)
    }

    /// The node before the trailer: the header when empty.
    pub(crate) fn last_node(&self) -> NodeIndex {
        self.nodes.prev(self.trailer)
    }

    pub(crate) fn is_sentinel(&self, node: NodeIndex) -> bool {
        node == self.header || node == self.trailer
    }

    /// Allocates a node for `value` and splices it in between `prev` and `succ`.
    ///
    /// # Panics
    /// Panics if `prev` and `succ` aren't adjacent, in that order. This is only ever called by
    /// the list types themselves with nodes they've just read from the list, so a failure is a bug
    /// rather than something a caller could recover from.
    pub(crate) fn insert_between(&mut self, value: T, prev: NodeIndex, succ: NodeIndex) -> NodeIndex {
        assert!(
            self.nodes.node(prev).next == Some(succ),
            "insert_between: prev.next is not succ"
        );
        assert!(
            self.nodes.node(succ).prev == Some(prev),
            "insert_between: succ.prev is not prev"
        );

        let node = self.nodes.insert(Node::new(value, Some(prev), Some(succ)));
        self.nodes.node_mut(prev).next = Some(node);
        self.nodes.node_mut(succ).prev = Some(node);
        self.len += 1;
        node
    }

    /// Unlinks `node`, frees its slot and returns its value. Any index to the node is stale
    /// afterwards.
    ///
    /// # Panics
    /// Panics if `node` is a sentinel or isn't live in this list.
    pub(crate) fn delete_node(&mut self, node: NodeIndex) -> T {
        assert!(!self.is_sentinel(node), "delete_node: attempted to delete a sentinel");

        let Node { value, prev, next } = self.nodes.remove(node).unreachable();
        let (prev, next) = (prev.unreachable(), next.unreachable());
        self.nodes.node_mut(prev).next = Some(next);
        self.nodes.node_mut(next).prev = Some(prev);
        self.len -= 1;

        value.unreachable()
    }

    /// Walks the list in both directions, checking every link against its counterpart.
    #[allow(unused)]
    pub(crate) fn verify_double_links(&self) {
        let mut curr = self.header;
        for _ in 0..self.len {
            let next = self.nodes.next(curr);
            assert!(self.nodes.prev(next) == curr);
            curr = next;
        }
        assert!(self.nodes.next(curr) == self.trailer);

        let mut curr = self.trailer;
        for _ in 0..self.len {
            curr = self.nodes.prev(curr);
        }
        assert!(self.nodes.prev(curr) == self.header);
        // Sentinels plus one node per element; nothing leaked in the arena.
        assert!(self.nodes.live() == self.len + 2);
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut last = self.last_node();
        for item in iter {
            last = self.insert_between(item, last, self.trailer);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        DoublyLinkedList {
            nodes: self.nodes.clone(),
            header: self.header,
            trailer: self.trailer,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugContents<'a, T>(&'a DoublyLinkedList<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_sequence(f, "DoublyLinkedList", self.iter(), " <-> ")
    }
}
