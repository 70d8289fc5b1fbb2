//! Error types shared by the collections in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A site (or index) was outside of the range `0..len` of the structure it was used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of valid indices at the time of the call.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range 0..{}!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An element was requested from a structure that holds none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to take an element from an empty collection!")]
pub struct EmptyCollection;

/// A [`Position`](crate::collections::linked::Position) couldn't be used with the list it was
/// passed to.
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPosition {
    /// The position was issued by a different list.
    #[display("Position belongs to a different list!")]
    ForeignContainer,
    /// The element at the position has since been deleted.
    #[display("Position refers to an element that has been deleted!")]
    Expired,
}

/// Any of the recoverable errors produced by this crate, for callers that mix several structures
/// behind one `?`.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`EmptyCollection`].
    EmptyCollection(EmptyCollection),
    /// See [`InvalidPosition`].
    InvalidPosition(InvalidPosition),
}
