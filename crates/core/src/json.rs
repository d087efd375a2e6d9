//! Payload and path types for drawing flag data
//!
//! This module defines the two types every other layer works on:
//! - Payload: Newtype wrapper around serde_json::Value holding a nested form/save record
//! - FlagPath: Dotted path into a payload (e.g., "fillStyle.texture.width")

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use thiserror::Error;

/// Nested record being prepared for persistence
///
/// Newtype around serde_json::Value providing:
/// - Direct access to underlying serde_json::Value via Deref/DerefMut
/// - Path lookups with [`FlagPath`]
/// - The single boundary check the normalizer needs (root must be an object)
///
/// # Examples
///
/// ```
/// use drawflags_core::{FlagPath, Payload};
///
/// let payload: Payload = r#"{"textStyle": {"fill": "red"}}"#.parse().unwrap();
/// let path: FlagPath = "textStyle.fill".parse().unwrap();
///
/// assert_eq!(payload.get_path(&path).and_then(|v| v.as_str()), Some("red"));
/// assert!(Payload::default().is_object());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    /// Create an empty payload object
    pub fn object() -> Self {
        Payload(Value::Object(Map::new()))
    }

    /// Create from a serde_json::Value
    pub fn from_value(value: Value) -> Self {
        Payload(value)
    }

    /// Get the underlying serde_json::Value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Get a mutable reference to the underlying serde_json::Value
    pub fn as_inner_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    /// Borrow the root object mutably
    ///
    /// Fails with [`Error::InvalidPayload`] when the root is not an object.
    /// This is the only shape the payload is required to have.
    pub fn root_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let found = kind_name(&self.0);
        self.0
            .as_object_mut()
            .ok_or(Error::InvalidPayload { found })
    }

    /// Look up the value at `path`
    ///
    /// Returns None if any segment is missing or crosses a non-object.
    /// The root path resolves to the whole payload.
    pub fn get_path(&self, path: &FlagPath) -> Option<&Value> {
        path.segments()
            .iter()
            .try_fold(&self.0, |current, segment| current.as_object()?.get(segment))
    }

    /// Mutable lookup of the value at `path`
    ///
    /// Never creates containers; see the engine's `vivify` for that.
    pub fn get_path_mut(&mut self, path: &FlagPath) -> Option<&mut Value> {
        path.segments().iter().try_fold(&mut self.0, |current, segment| {
            current.as_object_mut()?.get_mut(segment)
        })
    }
}

impl FromStr for Payload {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s).map(Payload)
    }
}

impl Deref for Payload {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Payload {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Default is an empty object, the shape every hook starts from
impl Default for Payload {
    fn default() -> Self {
        Self::object()
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Payload(v)
    }
}

impl From<Payload> for Value {
    fn from(v: Payload) -> Self {
        v.0
    }
}

/// Host truthiness of a stored value
///
/// `null`, `false`, `0` and `""` are falsy. Arrays and objects are always
/// truthy, even when empty.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Short name of a value's kind, used in error messages and logs
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// FlagPath
// =============================================================================

/// Error type for flag path parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Empty key in path
    #[error("empty key in path at position {0}")]
    EmptyKey(usize),
    /// Unexpected character
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
}

/// A dotted path into a payload
///
/// FlagPath is a sequence of object keys. Keys may contain alphanumerics,
/// `_` and `-`, so module ids like `advanced-drawing-tools` are a single
/// segment.
///
/// | Syntax | Meaning | Example |
/// |--------|---------|---------|
/// | `key` | Object property | `textStyle` |
/// | `.key` | Same, leading dot ignored | `.textStyle` |
/// | `key1.key2` | Nested property | `textStyle.fill` |
/// | (empty) | Root | `` |
///
/// # Examples
///
/// ```
/// use drawflags_core::FlagPath;
///
/// let scope = FlagPath::root().key("flags").key("advanced-drawing-tools");
/// let fill: FlagPath = "textStyle.fill".parse().unwrap();
///
/// let full = scope.join(&fill);
/// assert_eq!(full.to_string(), "flags.advanced-drawing-tools.textStyle.fill");
/// assert!(scope.is_ancestor_of(&full));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FlagPath {
    segments: Vec<String>,
}

impl FlagPath {
    /// Create the root path (empty path)
    pub fn root() -> Self {
        FlagPath {
            segments: Vec::new(),
        }
    }

    /// Create a path from a vector of segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        FlagPath { segments }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root path (empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a key segment (builder pattern)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Concatenate `other` below this path
    pub fn join(&self, other: &FlagPath) -> FlagPath {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend(self.segments.iter().cloned());
        segments.extend(other.segments.iter().cloned());
        FlagPath { segments }
    }

    /// Split into container segments and the leaf key (None if root)
    pub fn split_leaf(&self) -> Option<(&[String], &str)> {
        self.segments
            .split_last()
            .map(|(leaf, parents)| (parents, leaf.as_str()))
    }

    /// Check if this path is an ancestor of another (or equal)
    ///
    /// The root path is an ancestor of all paths.
    pub fn is_ancestor_of(&self, other: &FlagPath) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// Check if this path is a descendant of another (or equal)
    pub fn is_descendant_of(&self, other: &FlagPath) -> bool {
        other.is_ancestor_of(self)
    }

    /// Check if two paths overlap (one is ancestor/descendant of the other)
    ///
    /// Normalizing two non-overlapping paths touches disjoint leaves.
    pub fn overlaps(&self, other: &FlagPath) -> bool {
        self.is_ancestor_of(other) || self.is_descendant_of(other)
    }

    /// Convert to a dotted string representation
    pub fn to_path_string(&self) -> String {
        self.segments.join(".")
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

impl FromStr for FlagPath {
    type Err = PathParseError;

    /// Parse a path from a string
    ///
    /// Supported syntax:
    /// - `foo` or `.foo` - object key
    /// - `foo.bar` - nested keys
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let body = s.strip_prefix('.').unwrap_or(s);
        if body.is_empty() {
            return Ok(FlagPath::root());
        }

        let offset = s.len() - body.len();
        let mut segments = Vec::new();
        let mut start = offset;

        for part in body.split('.') {
            if part.is_empty() {
                return Err(PathParseError::EmptyKey(start));
            }
            if let Some((i, c)) = part.char_indices().find(|&(_, c)| !is_key_char(c)) {
                return Err(PathParseError::UnexpectedChar(c, start + i));
            }
            segments.push(part.to_string());
            start += part.len() + 1;
        }

        Ok(FlagPath { segments })
    }
}

impl fmt::Display for FlagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}
