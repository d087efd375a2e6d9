//! Deep-clean pass run after normalization
//!
//! Removes `null` leaves and objects left empty, optionally encoding each
//! removed `null` as a `-=key` deletion marker so the host deletes the
//! persisted value instead of ignoring the field.

use drawflags_core::Payload;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

/// Key prefix the host reads as "delete this key"
pub const DELETION_PREFIX: &str = "-=";

/// Deletion marker key for `key`
pub fn deletion_key(key: &str) -> String {
    format!("{}{}", DELETION_PREFIX, key)
}

/// Options for [`clean_data`]
///
/// ```
/// use drawflags_engine::CleanOptions;
///
/// let update = CleanOptions::new().deletion_keys(true).inplace(true).partial(true);
/// assert!(update.partial);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Replace removed `null` leaves with `-=key` markers
    pub deletion_keys: bool,
    /// Clean the given payload instead of a copy
    pub inplace: bool,
    /// The payload is a sparse diff: keep the deletion markers it already carries
    pub partial: bool,
}

impl CleanOptions {
    /// All options off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`CleanOptions::deletion_keys`]
    pub fn deletion_keys(mut self, enabled: bool) -> Self {
        self.deletion_keys = enabled;
        self
    }

    /// Set [`CleanOptions::inplace`]
    pub fn inplace(mut self, enabled: bool) -> Self {
        self.inplace = enabled;
        self
    }

    /// Set [`CleanOptions::partial`]
    pub fn partial(mut self, enabled: bool) -> Self {
        self.partial = enabled;
        self
    }
}

/// What a clean pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Keys removed (null leaves, empty objects, dropped markers)
    pub removed: usize,
    /// Deletion markers written
    pub markers: usize,
}

/// Clean `data` according to `options`
///
/// With `inplace` the payload itself is cleaned and borrowed back. Otherwise
/// it is left untouched and a cleaned copy is returned.
pub fn clean_data(data: &mut Payload, options: CleanOptions) -> Cow<'_, Payload> {
    if options.inplace {
        clean_in_place(data, options);
        Cow::Borrowed(data)
    } else {
        let mut copy = data.clone();
        clean_in_place(&mut copy, options);
        Cow::Owned(copy)
    }
}

/// Clean `data` in place, ignoring [`CleanOptions::inplace`]
///
/// A non-object root is left as it is.
pub fn clean_in_place(data: &mut Payload, options: CleanOptions) -> CleanStats {
    let mut stats = CleanStats::default();
    if let Value::Object(map) = data.as_inner_mut() {
        clean_object(map, &options, &mut stats);
    }
    if stats != CleanStats::default() {
        debug!(
            target: "drawflags::prune",
            removed = stats.removed,
            markers = stats.markers,
            "cleaned payload"
        );
    }
    stats
}

fn clean_object(map: &mut Map<String, Value>, options: &CleanOptions, stats: &mut CleanStats) {
    let keys: Vec<String> = map.keys().cloned().collect();
    let mut existing_markers = Vec::new();
    let mut written_markers = Vec::new();

    for key in keys {
        if key.starts_with(DELETION_PREFIX) {
            existing_markers.push(key);
            continue;
        }
        let (remove, mark) = match map.get_mut(&key) {
            Some(Value::Object(child)) => {
                clean_object(child, options, stats);
                (child.is_empty(), false)
            }
            Some(Value::Null) => (true, options.deletion_keys),
            _ => (false, false),
        };
        if remove {
            map.remove(&key);
            stats.removed += 1;
        }
        if mark {
            let marker = deletion_key(&key);
            map.insert(marker.clone(), Value::Null);
            written_markers.push(marker);
            stats.markers += 1;
        }
    }

    for marker in existing_markers {
        if written_markers.contains(&marker) {
            continue;
        }
        let target_kept = marker
            .strip_prefix(DELETION_PREFIX)
            .map_or(false, |target| map.contains_key(target));
        if !options.partial || target_kept {
            map.remove(&marker);
            stats.removed += 1;
        }
    }
}
