//! A module containing [`PositionalList`] and its [`Position`] handle.
//!
//! [`PositionalList`] and [`Position`] are also re-exported under the parent module.

mod iter;
mod position;
mod positional_list;

pub use iter::*;
pub(crate) use position::ListId;
pub use position::Position;
pub use positional_list::*;
