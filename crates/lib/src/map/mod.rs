//! Insertion-ordered map.
//!
//! This module provides [`OrderedMap`], the container used as the in-memory
//! form of documents whose wire layout depends on field order. Field order has
//! to survive a decode/encode round trip exactly, so the map remembers the
//! order in which keys were first inserted and every iteration follows it.
//!
//! # Core Types
//!
//! - [`OrderedMap`] - The container: a key/value store plus its order sequence
//! - [`MapSource`] - Map-like values that can be copied into an `OrderedMap`
//! - [`MapError`] - Errors raised by bulk construction
//! - [`iter`] - Iterators, all in insertion order
//!
//! # Ordering Rules
//!
//! - **First insertion wins**: setting an existing key replaces its value but
//!   not its position
//! - **Delete then set moves to the end**: a removed key is forgotten entirely
//! - **Merge keeps the left order**: shared keys stay where the receiver had
//!   them, new keys are appended in the other map's order
//! - **Order-sensitive equality**: the same pairs in a different order are
//!   not equal
//!
//! ```
//! use ordered_hash::OrderedMap;
//!
//! let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
//! map.set("a", 10);
//! map.delete("b");
//! map.set("b", 20);
//!
//! assert_eq!(map.to_vec(), vec![("a", 10), ("c", 3), ("b", 20)]);
//! ```
//!
//! # Sources Without Order
//!
//! `from_map`, `replace` and `merge` accept a `HashMap`. Its entries are copied
//! in the order the `HashMap` enumerates them, which is unspecified. Use an
//! `OrderedMap`, a `BTreeMap` or a list of pairs when the resulting order
//! matters.

pub mod errors;
mod implementation;
pub mod iter;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod source;

pub use errors::MapError;
pub use implementation::OrderedMap;
pub use source::MapSource;
