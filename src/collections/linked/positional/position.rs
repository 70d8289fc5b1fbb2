use std::sync::atomic::{AtomicU64, Ordering};

use crate::collections::linked::node::NodeIndex;

/// Identifies one [`PositionalList`](super::PositionalList) for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub fn next() -> ListId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to the location of a single element in a
/// [`PositionalList`](super::PositionalList).
///
/// A Position keeps referring to the same element while other elements are added, removed or
/// the list is sorted, and becomes invalid once its own element is deleted. Two positions are
/// equal if they refer to the same element of the same list, regardless of the values stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) list: ListId,
    pub(crate) node: NodeIndex,
}
