//! A module containing [`DoublyLinkedList`] and associated iterator types.
//!
//! [`DoublyLinkedList`] is also re-exported under the parent module.

mod doubly_linked_list;
mod iter;

pub use doubly_linked_list::*;
pub use iter::*;
