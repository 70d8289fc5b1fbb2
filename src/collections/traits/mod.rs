//! Traits shared between collections with a common abstract interface.

pub mod union_find;

#[doc(inline)]
pub use union_find::UnionFind;
