//! A module containing [`CircularList`], a cursor-based ring of doubly linked nodes.
//!
//! [`CircularList`] is also re-exported under the parent module.

mod circular_list;
mod iter;
mod tests;

pub use circular_list::*;
pub use iter::*;
