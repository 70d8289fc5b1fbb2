//! Linked collection types. Primarily revolves around [`DoublyLinkedList`], which
//! [`PositionalList`] and [`Deque`] are built on, and the sentinel-free [`CircularList`].
//!
//! # Method
//! All of these types store their nodes in an arena owned by the collection and link them by
//! index. Deleting a node frees its slot for reuse and bumps the slot's generation, which is what
//! allows a [`Position`] to tell that its element is gone.
//!
//! Structural mutation while iterating is ruled out by the borrow checker: iterators borrow their
//! collection for as long as they live.

pub mod list;
pub(crate) mod node;

#[cfg(feature = "circular")]
pub mod circular;
#[cfg(feature = "deque")]
pub mod deque;
#[cfg(feature = "positional")]
pub mod positional;

#[doc(inline)]
pub use list::DoublyLinkedList;

#[cfg(feature = "circular")]
#[doc(inline)]
pub use circular::CircularList;
#[cfg(feature = "deque")]
#[doc(inline)]
pub use deque::Deque;
#[cfg(feature = "positional")]
#[doc(inline)]
pub use positional::{Position, PositionalList};

#[doc(inline)]
pub use crate::util::error::{EmptyCollection, InvalidPosition};

/// Reduces a rotation of `steps` over `len` elements to the equivalent rotation in the range
/// `(-len/2, len/2]`, so that it can be walked in the shorter direction. Returns 0 for an empty
/// collection.
#[allow(unused)]
pub(crate) const fn shortest_rotation(steps: isize, len: usize) -> isize {
    // A collection can't hold more than isize::MAX elements.
    let len = len as isize;
    if len == 0 {
        return 0;
    }
    let s = steps.rem_euclid(len);
    if s > len / 2 { s - len } else { s }
}
