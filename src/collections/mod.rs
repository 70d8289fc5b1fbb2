//! Various collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as ownership of linked nodes, stable handles and amortized analysis.
//!
//! # Method
//! Structures which share an abstract interface implement a common trait from [`traits`], so code
//! can be written once over all of them.

#[cfg(feature = "disjoint")]
pub mod disjoint;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
