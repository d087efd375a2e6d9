//! Core types for drawflags
//!
//! This crate defines the data every other layer works on:
//! - Payload: the nested record being normalized before persistence
//! - FlagPath: dotted path addressing a leaf inside a payload
//! - Error: boundary errors (non-object root, unusable path)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod json;

pub use error::{Error, Result};
pub use json::{is_falsy, kind_name, FlagPath, PathParseError, Payload};
