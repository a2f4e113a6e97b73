//!
//! ordered-hash: an insertion-ordered map for documents whose field order matters.
//!
//! Binary document formats lay fields out on the wire in a fixed order, and a
//! decode/encode round trip must reproduce that order exactly. This library
//! provides the in-memory container those documents live in.
//!
//! ## Core Concepts
//!
//! * **OrderedMap (`map::OrderedMap`)**: A key/value store paired with the sequence of its keys in
//!   first-insertion order. Updating a key never moves it; iteration, `Debug`, serialization and
//!   equality all follow the recorded order.
//! * **Sources (`map::MapSource`)**: Map-like values (`OrderedMap`, `HashMap`, `BTreeMap`, lists of
//!   pairs) that can seed, replace or be merged into an `OrderedMap`. A source reports whether its
//!   enumeration order is meaningful.
//! * **Documents (`document::Document`)**: `OrderedMap<String, Value>`, the concrete form consumed by
//!   encoders (which iterate in order) and decoders (which `set` fields in wire order).
//!
//! ## Features
//!
//! * `serde` (default): order-preserving `Serialize`/`Deserialize` for `OrderedMap`, and an
//!   untagged representation for `Value`.

pub mod document;
pub mod map;

/// Re-export the `OrderedMap` struct for easier access.
pub use map::OrderedMap;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from the map module
    #[error(transparent)]
    Map(map::MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
        }
    }

    /// Check if this error was caused by malformed input.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_invalid_argument(),
        }
    }
}
