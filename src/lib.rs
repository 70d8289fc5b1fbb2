//! This crate is my attempt at writing the classic textbook connectivity and linked structures
//! properly, in Rust.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. Union-find and linked lists are the first structures most
//! people meet, and writing them without a garbage collector is a good way to find out how much
//! of their usual presentation depends on one.
//!
//! # Contents
//! - [`collections::disjoint`]: four disjoint-set (union-find) implementations, from naive
//!   relabelling up to weighted union with path compression, behind the
//!   [`UnionFind`](collections::traits::UnionFind) trait.
//! - [`collections::linked`]: a sentinel-based
//!   [`DoublyLinkedList`](collections::linked::DoublyLinkedList) and the structures built on top
//!   of it, a [`PositionalList`](collections::linked::PositionalList) and a
//!   [`Deque`](collections::linked::Deque), plus a
//!   [`CircularList`](collections::linked::CircularList) with a cursor.
//!
//! # Method
//! The linked structures don't use raw pointers between nodes. Each collection owns an arena of
//! nodes and links them by index, which keeps almost all of the crate in safe Rust. The one
//! exception is mutable iteration, which needs to hand out disjoint mutable references into the
//! arena.
//!
//! # Error Handling
//! Specifically for a library like this, it is more ergonomic for functions to panic in some
//! cases, because users don't want to be forced to handle an error every time they invoke a
//! method. So wherever a method can fail because of its arguments, there is a `try_` version
//! returning a [`Result`] and a plain version that panics with the error's message.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! with structs (often ZSTs) and enums that implement [`Error`](std::error::Error). They can all
//! be converted into [`CollectionError`] for callers that mix several structures.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
//!
//! # Features
//! Each structure sits behind a Cargo feature (`disjoint`, `linked`, `positional`, `deque`,
//! `circular`), all of which are enabled by default through `collections-all`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{CollectionError, EmptyCollection, IndexOutOfBounds, InvalidPosition};
