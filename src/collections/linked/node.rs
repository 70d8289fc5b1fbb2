use std::mem;

use crate::util::option::OptionExtension;

// NOTE: Nodes are addressed by index into an arena rather than by pointer. A doubly linked node is
// referenced by both of its neighbours, which doesn't map onto single ownership, and an index with
// a generation also lets handles detect that their node is gone.

pub(crate) type Link = Option<NodeIndex>;

/// The address of a node within a [`NodeArena`]. The generation is bumped every time the slot is
/// freed, so an index outlives its node without ever aliasing a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex {
    pub(crate) slot: usize,
    pub(crate) generation: u64,
}

pub(crate) struct Node<T> {
    /// `None` only for sentinels.
    pub value: Option<T>,
    pub prev: Link,
    pub next: Link,
}

impl<T> Node<T> {
    pub const fn sentinel() -> Node<T> {
        Node {
            value: None,
            prev: None,
            next: None,
        }
    }

    pub const fn new(value: T, prev: Link, next: Link) -> Node<T> {
        Node {
            value: Some(value),
            prev,
            next,
        }
    }
}

enum Slot<T> {
    Occupied {
        generation: u64,
        node: Node<T>,
    },
    Vacant {
        generation: u64,
        next_free: Option<usize>,
    },
}

use Slot::*;

pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub const fn new() -> NodeArena<T> {
        NodeArena {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    /// The number of occupied slots, sentinels included.
    #[allow(unused)]
    pub const fn live(&self) -> usize {
        self.live
    }

    /// The number of slots ever allocated, occupied or vacant.
    #[allow(unused)]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn insert(&mut self, node: Node<T>) -> NodeIndex {
        self.live += 1;
        match self.free {
            Some(slot) => {
                let generation = match self.slots[slot] {
                    Vacant { generation, next_free } => {
                        self.free = next_free;
                        generation
                    },
                    Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.slots[slot] = Occupied { generation, node };
                NodeIndex { slot, generation }
            },
            None => {
                let slot = self.slots.len();
                self.slots.push(Occupied { generation: 0, node });
                NodeIndex { slot, generation: 0 }
            },
        }
    }

    /// Removes the node at `index` and returns it, or [`None`] if the index is stale.
    pub fn remove(&mut self, index: NodeIndex) -> Option<Node<T>> {
        if !self.contains(index) {
            return None;
        }

        let vacant = Vacant {
            generation: index.generation.wrapping_add(1),
            next_free: self.free,
        };
        self.free = Some(index.slot);
        self.live -= 1;

        match mem::replace(&mut self.slots[index.slot], vacant) {
            Occupied { node, .. } => Some(node),
            Vacant { .. } => None,
        }
    }

    #[allow(unused)]
    pub fn contains(&self, index: NodeIndex) -> bool {
        matches!(
            self.slots.get(index.slot),
            Some(Occupied { generation, .. }) if *generation == index.generation
        )
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node<T>> {
        match self.slots.get(index.slot) {
            Some(Occupied { generation, node }) if *generation == index.generation => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node<T>> {
        match self.slots.get_mut(index.slot) {
            Some(Occupied { generation, node }) if *generation == index.generation => Some(node),
            _ => None,
        }
    }

    /// Returns the node at an index that the owning structure knows to be live.
    pub fn node(&self, index: NodeIndex) -> &Node<T> {
        self.get(index).unreachable()
    }

    /// Mutable counterpart of [`NodeArena::node`].
    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        self.get_mut(index).unreachable()
    }

    pub fn next(&self, index: NodeIndex) -> NodeIndex {
        self.node(index).next.unreachable()
    }

    pub fn prev(&self, index: NodeIndex) -> NodeIndex {
        self.node(index).prev.unreachable()
    }

    pub fn value(&self, index: NodeIndex) -> &T {
        self.node(index).value.as_ref().unreachable()
    }

    #[allow(unused)]
    pub fn value_mut(&mut self, index: NodeIndex) -> &mut T {
        self.node_mut(index).value.as_mut().unreachable()
    }

    /// Drops every node, invalidating all outstanding indices.
    #[allow(unused)]
    pub fn clear(&mut self) {
        for slot in 0..self.slots.len() {
            if let Occupied { generation, .. } = self.slots[slot] {
                self.slots[slot] = Vacant {
                    generation: generation.wrapping_add(1),
                    next_free: self.free,
                };
                self.free = Some(slot);
            }
        }
        self.live = 0;
    }

    /// Returns a raw handle for handing out disjoint mutable borrows of node values.
    pub fn as_raw(&mut self) -> RawArena<T> {
        RawArena {
            slots: self.slots.as_mut_ptr(),
            len: self.slots.len(),
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            prev: self.prev,
            next: self.next,
        }
    }
}

impl<T: Clone> Clone for Slot<T> {
    fn clone(&self) -> Self {
        match self {
            Occupied { generation, node } => Occupied {
                generation: *generation,
                node: node.clone(),
            },
            Vacant { generation, next_free } => Vacant {
                generation: *generation,
                next_free: *next_free,
            },
        }
    }
}

impl<T: Clone> Clone for NodeArena<T> {
    // Cloning slot for slot keeps every index valid in the copy.
    fn clone(&self) -> Self {
        NodeArena {
            slots: self.slots.clone(),
            free: self.free,
            live: self.live,
        }
    }
}

/// A pointer to the slots of a [`NodeArena`], used by mutable iterators which need to yield
/// references to several nodes at once.
pub(crate) struct RawArena<T> {
    slots: *mut Slot<T>,
    len: usize,
}

impl<T> RawArena<T> {
    /// Returns the node at `index`.
    ///
    /// # Safety
    /// The arena this was created from must outlive `'a` and must not be accessed through any
    /// other path during `'a`. No two calls may request the same node while the returned
    /// references are alive.
    pub unsafe fn node_mut<'a>(&self, index: NodeIndex) -> &'a mut Node<T> {
        assert!(index.slot < self.len);
        // SAFETY: The slot is in bounds and the caller guarantees that no other reference to it
        // exists for 'a.
        match unsafe { &mut *self.slots.add(index.slot) } {
            Occupied { generation, node } if *generation == index.generation => node,
            _ => unreachable!("linked structure invariant broken"),
        }
    }
}

impl<T> Clone for RawArena<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawArena<T> {}
