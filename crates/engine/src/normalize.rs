//! Nested-path value normalizer
//!
//! One traversal, three leaf policies. The walk auto-vivifies every missing
//! container on the way to the leaf; only the leaf transform depends on the
//! [`Policy`].
//!
//! # Leaf policies
//!
//! | Policy | Absent / null | Scalar | Collapses to `null` when |
//! |--------|---------------|--------|---------------------------|
//! | `ScalarSave` | `save(None)` | `save(value)` | (never an array) |
//! | `StringArray` | `[]` | `[value]` | every element is falsy |
//! | `NumberArray` | `[]` | `[value]` | every element is `null` |
//!
//! `0` survives a number array but not a string array.

use crate::coerce::SaveCoercion;
use drawflags_core::{is_falsy, kind_name, Error, FlagPath, Payload, Result};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, trace};

/// Leaf coercion applied by [`normalize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Replace the leaf with the save coercion of its current value
    ScalarSave,
    /// Always an array of strings, or `null` when every entry is falsy
    StringArray,
    /// Always an array of numbers, or `null` when every entry is `null`
    NumberArray,
}

impl Policy {
    /// Stable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            Policy::ScalarSave => "scalar_save",
            Policy::StringArray => "string_array",
            Policy::NumberArray => "number_array",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Make the leaf at `path` conform to `policy`
///
/// Missing, falsy or non-object intermediate values are replaced by empty
/// objects; existing objects are reused as-is. The leaf is always written.
///
/// # Errors
///
/// - [`Error::InvalidPayload`] if the payload root is not an object
/// - [`Error::InvalidPath`] if `path` is the root path
pub fn normalize(
    payload: &mut Payload,
    path: &FlagPath,
    policy: Policy,
    coercion: &dyn SaveCoercion,
) -> Result<()> {
    let (parents, leaf) = path.split_leaf().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_string(),
        reason: "path must name a leaf".to_string(),
    })?;

    let container = vivify_segments(payload.root_mut()?, parents);
    match policy {
        Policy::ScalarSave => {
            let saved = coercion.save(container.get(leaf));
            container.insert(leaf.to_string(), saved);
        }
        Policy::StringArray => compact_array(container, leaf, is_falsy),
        Policy::NumberArray => compact_array(container, leaf, Value::is_null),
    }

    trace!(target: "drawflags::normalize", %path, %policy, "normalized field");
    Ok(())
}

/// [`normalize`] with the path given as dotted text
///
/// # Errors
///
/// [`Error::InvalidPath`] when `path` does not parse, carrying the parse
/// failure as its reason; otherwise as [`normalize`].
pub fn normalize_dotted(
    payload: &mut Payload,
    path: &str,
    policy: Policy,
    coercion: &dyn SaveCoercion,
) -> Result<()> {
    let parsed: FlagPath = path.parse().map_err(|e| Error::from_parse(path, e))?;
    normalize(payload, &parsed, policy, coercion)
}

/// Make every segment of `path` an object and return the innermost one
///
/// Uses the same container rule as [`normalize`].
pub fn vivify<'p>(payload: &'p mut Payload, path: &FlagPath) -> Result<&'p mut Map<String, Value>> {
    Ok(vivify_segments(payload.root_mut()?, path.segments()))
}

fn vivify_segments<'a>(
    mut container: &'a mut Map<String, Value>,
    segments: &[String],
) -> &'a mut Map<String, Value> {
    for segment in segments {
        container = descend(container, segment);
    }
    container
}

/// Step into `key`, creating an empty object there unless one exists
fn descend<'a>(container: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = container.entry(key).or_insert(Value::Null);
    if !slot.is_object() && !is_falsy(slot) {
        debug!(
            target: "drawflags::normalize",
            key,
            found = kind_name(slot),
            "replacing non-object container"
        );
    }
    object_slot(slot)
}

/// Borrow `slot` as an object, resetting it to `{}` first if it is not one
fn object_slot(slot: &mut Value) -> &mut Map<String, Value> {
    match slot {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            object_slot(other)
        }
    }
}

/// Wrap the leaf into an array, then collapse it if every element is empty
fn compact_array(container: &mut Map<String, Value>, leaf: &str, is_empty: fn(&Value) -> bool) {
    let items = match container.remove(leaf) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => vec![other],
    };

    let compacted = if items.iter().all(is_empty) {
        if !items.is_empty() {
            debug!(target: "drawflags::normalize", leaf, len = items.len(), "collapsed empty array");
        }
        Value::Null
    } else {
        Value::Array(items)
    };
    container.insert(leaf.to_string(), compacted);
}
