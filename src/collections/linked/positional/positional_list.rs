use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{ListId, Position, Positions};
use crate::collections::linked::list::{DoublyLinkedList, Iter};
use crate::collections::linked::node::NodeIndex;
#[doc(inline)]
pub use crate::util::error::InvalidPosition;
use crate::util::fmt::write_sequence;
use crate::util::result::ResultExtension;

/// A sequence of elements which can be accessed and modified through [`Position`] handles.
///
/// PositionalList is a [`DoublyLinkedList`] with a public interface expressed in positions rather
/// than indices. Every method below runs in `O(1)`, apart from [`sort`](PositionalList::sort),
/// because a position takes the place of the seek that an index would require.
///
/// Each validated method comes in two forms: a `try_` method returning an [`InvalidPosition`]
/// error, and one which panics with the same message.
///
/// # Example
/// ```
/// use congeries::collections::linked::PositionalList;
///
/// let mut list = PositionalList::new();
/// let a = list.add_first('a');
/// let b = list.add_after(a, 'b');
/// list.add_last('c');
///
/// assert_eq!(list.delete(b), 'b');
/// assert_eq!(list.to_string(), "PositionalList(a <-> c)");
/// assert!(list.try_get(b).is_err());
/// ```
pub struct PositionalList<T> {
    pub(crate) inner: DoublyLinkedList<T>,
    pub(crate) id: ListId,
}

impl<T> PositionalList<T> {
    /// Creates a new PositionalList with no elements.
    pub fn new() -> PositionalList<T> {
        PositionalList {
            inner: DoublyLinkedList::new(),
            id: ListId::next(),
        }
    }

    /// Returns the length of the PositionalList.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the PositionalList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the position of the first element, or [`None`] if the list is empty.
    pub fn first(&self) -> Option<Position> {
        self.make_position(self.inner.first_node())
    }

    /// Returns the position of the last element, or [`None`] if the list is empty.
    pub fn last(&self) -> Option<Position> {
        self.make_position(self.inner.last_node())
    }

    /// Returns the position before `pos`, or [`None`] if `pos` is first.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn before(&self, pos: Position) -> Option<Position> {
        self.try_before(pos).throw()
    }

    pub fn try_before(&self, pos: Position) -> Result<Option<Position>, InvalidPosition> {
        let node = self.validate(pos)?;
        Ok(self.make_position(self.inner.nodes.prev(node)))
    }

    /// Returns the position after `pos`, or [`None`] if `pos` is last.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn after(&self, pos: Position) -> Option<Position> {
        self.try_after(pos).throw()
    }

    pub fn try_after(&self, pos: Position) -> Result<Option<Position>, InvalidPosition> {
        let node = self.validate(pos)?;
        Ok(self.make_position(self.inner.nodes.next(node)))
    }

    /// Inserts `value` at the front of the list and returns its position.
    pub fn add_first(&mut self, value: T) -> Position {
        let node = self.inner.insert_between(value, self.inner.header, self.inner.first_node());
        self.wrap(node)
    }

    /// Inserts `value` at the back of the list and returns its position.
    pub fn add_last(&mut self, value: T) -> Position {
        let node = self.inner.insert_between(value, self.inner.last_node(), self.inner.trailer);
        self.wrap(node)
    }

    /// Inserts `value` directly before `pos` and returns its position.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn add_before(&mut self, pos: Position, value: T) -> Position {
        self.try_add_before(pos, value).throw()
    }

    pub fn try_add_before(&mut self, pos: Position, value: T) -> Result<Position, InvalidPosition> {
        let succ = self.validate(pos)?;
        let prev = self.inner.nodes.prev(succ);
        let node = self.inner.insert_between(value, prev, succ);
        Ok(self.wrap(node))
    }

    /// Inserts `value` directly after `pos` and returns its position.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn add_after(&mut self, pos: Position, value: T) -> Position {
        self.try_add_after(pos, value).throw()
    }

    pub fn try_add_after(&mut self, pos: Position, value: T) -> Result<Position, InvalidPosition> {
        let prev = self.validate(pos)?;
        let succ = self.inner.nodes.next(prev);
        let node = self.inner.insert_between(value, prev, succ);
        Ok(self.wrap(node))
    }

    /// Removes the element at `pos` and returns it. `pos`, and every copy of it, is invalid
    /// afterwards.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn delete(&mut self, pos: Position) -> T {
        self.try_delete(pos).throw()
    }

    pub fn try_delete(&mut self, pos: Position) -> Result<T, InvalidPosition> {
        let node = self.validate(pos)?;
        Ok(self.inner.delete_node(node))
    }

    /// Replaces the element at `pos` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn replace(&mut self, pos: Position, value: T) -> T {
        self.try_replace(pos, value).throw()
    }

    pub fn try_replace(&mut self, pos: Position, value: T) -> Result<T, InvalidPosition> {
        Ok(mem::replace(self.try_get_mut(pos)?, value))
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn get(&self, pos: Position) -> &T {
        self.try_get(pos).throw()
    }

    pub fn try_get(&self, pos: Position) -> Result<&T, InvalidPosition> {
        let node = self.validate(pos)?;
        Ok(self.inner.nodes.value(node))
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` isn't valid for this list.
    pub fn get_mut(&mut self, pos: Position) -> &mut T {
        self.try_get_mut(pos).throw()
    }

    pub fn try_get_mut(&mut self, pos: Position) -> Result<&mut T, InvalidPosition> {
        let node = self.validate(pos)?;
        Ok(self.inner.nodes.value_mut(node))
    }

    /// Returns true if `pos` was issued by this list and its element hasn't been deleted.
    pub fn is_valid(&self, pos: Position) -> bool {
        self.validate(pos).is_ok()
    }

    /// Returns an iterator over the elements, from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns an iterator over the positions of the elements, from first to last.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            list: self,
            front: self.inner.first_node(),
            back: self.inner.last_node(),
            len: self.len(),
        }
    }
}

impl<T: Ord> PositionalList<T> {
    /// Sorts the elements into non-decreasing order.
    ///
    /// The values are moved between the existing nodes rather than the nodes being relinked, so
    /// every position stays valid and stays at the same place in the sequence: after sorting, the
    /// first position holds the smallest value, whichever value it held before. The sort is
    /// stable.
    ///
    /// If a comparison panics, the list is left in its original order.
    pub fn sort(&mut self) {
        let nodes: Vec<NodeIndex> = self.positions().map(|pos| pos.node).collect();

        // Only the permutation is sorted, so user code never runs while a node is empty.
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        let arena = &self.inner.nodes;
        order.sort_by(|&a, &b| arena.value(nodes[a]).cmp(arena.value(nodes[b])));

        let mut values: Vec<Option<T>> = nodes
            .iter()
            .map(|&node| self.inner.nodes.node_mut(node).value.take())
            .collect();
        for (&node, &from) in nodes.iter().zip(&order) {
            self.inner.nodes.node_mut(node).value = values[from].take();
        }
    }
}

impl<T> PositionalList<T> {
    /// Checks that `pos` belongs to this list and that its node is still live, returning the node.
    pub(crate) fn validate(&self, pos: Position) -> Result<NodeIndex, InvalidPosition> {
        if pos.list != self.id {
            return Err(InvalidPosition::ForeignContainer);
        }
        // Sentinels are never handed out, so a live node from this list is an element.
        if !self.inner.nodes.contains(pos.node) || self.inner.is_sentinel(pos.node) {
            return Err(InvalidPosition::Expired);
        }
        Ok(pos.node)
    }

    /// Maps a node to its position, with sentinels becoming [`None`].
    pub(crate) fn make_position(&self, node: NodeIndex) -> Option<Position> {
        if self.inner.is_sentinel(node) {
            None
        } else {
            Some(self.wrap(node))
        }
    }

    pub(crate) const fn wrap(&self, node: NodeIndex) -> Position {
        Position {
            list: self.id,
            node,
        }
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = PositionalList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for PositionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for PositionalList<T> {
    type Item = T;

    type IntoIter = crate::collections::linked::list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Lists compare by their elements. Positions aren't part of a list's value, so two lists with
// equal elements are equal even though neither accepts the other's positions.
impl<T: PartialEq> PartialEq for PositionalList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for PositionalList<T> {}

impl<T: Debug> Debug for PositionalList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for PositionalList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_sequence(f, "PositionalList", self.iter(), " <-> ")
    }
}
