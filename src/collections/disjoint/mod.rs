//! Disjoint-set (union-find) structures, all implementing
//! [`UnionFind`](crate::collections::traits::UnionFind).
//!
//! # Method
//! The four types here are successive refinements of the same idea, from slowest to fastest:
//!
//! | Type | `find` | `union` |
//! |-|-|-|
//! | [`QuickFind`] | `O(1)` | `O(n)` |
//! | [`QuickUnion`] | `O(n)` | `O(n)` |
//! | [`WeightedQuickUnion`] | `O(log n)` | `O(log n)` |
//! | [`WeightedQuickUnionPathCompression`] | `O(α(n))` amortized | `O(α(n))` amortized |
//!
//! All four agree on which sites are connected after any sequence of unions, but not on which
//! site represents each component, so their id arrays differ.

mod path_compression;
mod quick_find;
mod quick_union;
mod tests;
mod weighted_quick_union;

pub use path_compression::*;
pub use quick_find::*;
pub use quick_union::*;
pub use weighted_quick_union::*;

#[doc(inline)]
pub use crate::collections::traits::union_find::IndexOutOfBounds;
