use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::Iter;
use crate::collections::linked::node::{Node, NodeArena, NodeIndex};
use crate::collections::linked::shortest_rotation;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::option::OptionExtension;

/// A ring of doubly linked nodes with a cursor marking the current element.
///
/// There are no sentinels: the ring has no ends, and the element under the cursor acts as its
/// start. Iteration begins at the cursor and goes once around the ring.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `insert_at_cursor` | `O(1)` |
/// | `pop_at` | `O(1)` |
/// | `move_next/move_prev` | `O(1)` |
/// | `rotate(k)` | `O(min(k mod n, n - k mod n))` |
pub struct CircularList<T> {
    pub(crate) nodes: NodeArena<T>,
    pub(crate) state: RingState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RingState {
    Empty,
    Full {
        cursor: NodeIndex,
        len: usize,
    },
}

use RingState::*;

impl<T> CircularList<T> {
    /// Creates a new CircularList with no elements.
    pub const fn new() -> CircularList<T> {
        CircularList {
            nodes: NodeArena::new(),
            state: Empty,
        }
    }

    /// Returns the length of the CircularList.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full { len, .. } => len,
        }
    }

    /// Returns true if the CircularList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns a reference to the element under the cursor, if there is one.
    pub fn cursor(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full { cursor, .. } => Some(self.nodes.value(cursor)),
        }
    }

    /// Returns a mutable reference to the element under the cursor, if there is one.
    pub fn cursor_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full { cursor, .. } => Some(self.nodes.value_mut(cursor)),
        }
    }

    /// Inserts `value` directly after the cursor and moves the cursor onto it, returning a
    /// reference to the inserted value. Inserting into an empty ring creates a single node linked
    /// to itself.
    pub fn insert_at_cursor(&mut self, value: T) -> &mut T {
        let node = match self.state {
            Empty => {
                let node = self.nodes.insert(Node::new(value, None, None));
                let links = self.nodes.node_mut(node);
                links.prev = Some(node);
                links.next = Some(node);
                self.state = Full { cursor: node, len: 1 };
                node
            },
            Full { cursor, len } => {
                let succ = self.nodes.next(cursor);
                let node = self.nodes.insert(Node::new(value, Some(cursor), Some(succ)));
                self.nodes.node_mut(cursor).next = Some(node);
                self.nodes.node_mut(succ).prev = Some(node);
                self.state = Full { cursor: node, len: len + 1 };
                node
            },
        };
        self.nodes.value_mut(node)
    }

    /// Removes the element under the cursor and returns it. The cursor moves on to the removed
    /// element's successor.
    pub fn pop_at(&mut self) -> Result<T, EmptyCollection> {
        let Full { cursor, len } = self.state else {
            return Err(EmptyCollection);
        };

        let Node { value, prev, next } = self.nodes.remove(cursor).unreachable();
        self.state = match len.checked_sub(1) {
            Some(new_len) if new_len > 0 => {
                let (prev, next) = (prev.unreachable(), next.unreachable());
                self.nodes.node_mut(prev).next = Some(next);
                self.nodes.node_mut(next).prev = Some(prev);
                Full { cursor: next, len: new_len }
            },
            _ => Empty,
        };

        Ok(value.unreachable())
    }

    /// Moves the cursor one element forward, to its successor.
    pub fn move_next(&mut self) -> &mut Self {
        if let Full { cursor, len } = self.state {
            self.state = Full { cursor: self.nodes.next(cursor), len };
        }
        self
    }

    /// Moves the cursor one element backward, to its predecessor.
    pub fn move_prev(&mut self) -> &mut Self {
        if let Full { cursor, len } = self.state {
            self.state = Full { cursor: self.nodes.prev(cursor), len };
        }
        self
    }

    /// Rotates the ring `steps` places to the right, or to the left if `steps` is negative.
    ///
    /// Rotating right by one brings the last element (the cursor's predecessor) under the cursor,
    /// so a ring iterating as `0, 1, 2, 3` iterates as `3, 0, 1, 2` afterwards. The cursor walks
    /// whichever way round is shorter, and a rotation by any multiple of the length leaves the
    /// cursor where it is.
    pub fn rotate(&mut self, steps: isize) -> &mut Self {
        match shortest_rotation(steps, self.len()) {
            s if s > 0 => {
                for _ in 0..s {
                    self.move_prev();
                }
            },
            s => {
                for _ in 0..s.unsigned_abs() {
                    self.move_next();
                }
            },
        }
        self
    }

    /// Removes and drops every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.state = Empty;
    }

    /// Returns an iterator which starts at the cursor and goes once around the ring.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    #[allow(unused)]
    pub(crate) fn verify_ring(&self) {
        match self.state {
            Empty => assert!(self.nodes.live() == 0),
            Full { cursor, len } => {
                let mut curr = cursor;
                for _ in 0..len {
                    let next = self.nodes.next(curr);
                    assert!(self.nodes.prev(next) == curr);
                    curr = next;
                }
                assert!(curr == cursor, "ring should close after len steps");
                assert!(self.nodes.live() == len);
            },
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    /// Builds a ring in iteration order, leaving the cursor on the first item.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = CircularList::new();
        for item in iter {
            ring.insert_at_cursor(item);
        }
        // The cursor is on the last item inserted, whose successor is the first.
        ring.move_next();
        ring
    }
}

impl<T, const N: usize> From<[T; N]> for CircularList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        CircularList {
            nodes: self.nodes.clone(),
            state: self.state,
        }
    }
}

// Rings compare as the sequences they produce from their cursors.
impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularList")
            .field("contents", &DebugContents(self))
            .field("cursor", &self.cursor())
            .field("len", &self.len())
            .finish()
    }
}

// Lists the ring starting from the cursor.
struct DebugContents<'a, T>(&'a CircularList<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Display> Display for CircularList<T> {
    /// Formats the ring from the cursor, with the cursor's element in parentheses:
    /// `CircularList((1), 2, 3)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CircularList(")?;
        for (index, item) in self.iter().enumerate() {
            match index {
                0 => write!(f, "({item})")?,
                _ => write!(f, ", {item}")?,
            }
        }
        write!(f, ")")
    }
}
