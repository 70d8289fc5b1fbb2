//! A module containing [`Deque`], a double-ended queue built on
//! [`DoublyLinkedList`](super::DoublyLinkedList).
//!
//! [`Deque`] is also re-exported under the parent module.

mod deque;
mod tests;

pub use deque::*;
