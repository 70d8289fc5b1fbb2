use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::list::{DoublyLinkedList, IntoIter, Iter};
use crate::collections::linked::shortest_rotation;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::fmt::write_sequence;

/// A double-ended queue backed by a [`DoublyLinkedList`]. The left end is the front of the list
/// and the right end is the back.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `append/append_left` | `O(1)` |
/// | `pop/pop_left` | `O(1)` |
/// | `peek/peek_left` | `O(1)` |
/// | `rotate(k)` | `O(min(k mod n, n - k mod n))` |
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct Deque<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Deque<T> {
    /// Creates a new Deque with no elements.
    pub fn new() -> Deque<T> {
        Deque {
            list: DoublyLinkedList::new(),
        }
    }

    /// Returns the length of the Deque.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Deque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the right end.
    pub fn append(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Adds `value` to the left end.
    pub fn append_left(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the rightmost element.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.pop_back().ok_or(EmptyCollection)
    }

    /// Removes and returns the leftmost element.
    pub fn pop_left(&mut self) -> Result<T, EmptyCollection> {
        self.list.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the rightmost element, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns a reference to the leftmost element, if it exists.
    pub fn peek_left(&self) -> Option<&T> {
        self.list.front()
    }

    /// Rotates the Deque `steps` places to the right, or to the left if `steps` is negative.
    /// Rotating right by one moves the rightmost element to the left end.
    ///
    /// Elements are moved one at a time from one end to the other, in whichever direction needs
    /// fewer moves. A rotation by any multiple of the length moves nothing.
    pub fn rotate(&mut self, steps: isize) {
        match shortest_rotation(steps, self.len()) {
            s if s > 0 => {
                for _ in 0..s {
                    if let Some(value) = self.list.pop_back() {
                        self.list.push_front(value);
                    }
                }
            },
            s => {
                for _ in 0..s.unsigned_abs() {
                    if let Some(value) = self.list.pop_front() {
                        self.list.push_back(value);
                    }
                }
            },
        }
    }

    /// Removes and drops every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the elements, from left to right.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            list: DoublyLinkedList::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_sequence(f, "Deque", self.iter(), " <-> ")
    }
}
