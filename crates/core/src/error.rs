//! Error types for drawflags
//!
//! Leaf and intermediate shape problems never surface here: the normalizer
//! absorbs them into defaults. Only the boundary checks fail.

use crate::json::PathParseError;
use thiserror::Error;

/// Result type alias for drawflags operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boundary errors raised before a payload is touched
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The payload root is not an object
    #[error("invalid payload: expected an object at the root, found {found}")]
    InvalidPayload {
        /// Kind of value found at the root
        found: &'static str,
    },

    /// The path cannot address a leaf
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending path text
        path: String,
        /// Why it was rejected
        reason: String,
    },
}

impl Error {
    /// Build an [`Error::InvalidPath`] from a parse failure
    pub fn from_parse(path: &str, err: PathParseError) -> Self {
        Error::InvalidPath {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}
