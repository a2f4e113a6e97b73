//! Error types for ordered map operations.
//!
//! Almost every operation on an [`OrderedMap`](super::OrderedMap) is total. The
//! one exception is bulk construction from a flattened key/value list, which
//! rejects malformed input before anything is inserted.

use thiserror::Error;

/// Structured error types for ordered map operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Malformed input to a bulk constructor
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl MapError {
    /// Error for a flattened key/value list with an odd number of items.
    pub fn odd_item_count(count: usize) -> Self {
        MapError::InvalidArgument {
            reason: format!("odd number of elements for map ({count})"),
        }
    }

    /// Check if this error was caused by malformed input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MapError::InvalidArgument { .. })
    }

    /// Get the reason text if one is attached
    pub fn reason(&self) -> Option<&str> {
        match self {
            MapError::InvalidArgument { reason } => Some(reason),
        }
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
