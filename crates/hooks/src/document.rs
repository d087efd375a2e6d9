//! Drawing document hooks
//!
//! Pre-create and pre-update both repair a scalar text fill into a
//! one-element array and then prune the data. Pre-create works on a copy of
//! the document source and returns the update to apply; pre-update cleans the
//! incoming diff in place.

use crate::config::HookConfig;
use crate::Result;
use drawflags_core::Payload;
use drawflags_engine::{clean_data, deletion_key, CleanOptions};
use serde_json::Value;
use tracing::debug;

/// Wrap a scalar `textStyle.fill` flag into a one-element array
///
/// Missing, `null` and array fills are left alone. Returns whether the fill
/// was rewritten.
pub fn preprocess(data: &mut Payload, config: &HookConfig) -> bool {
    let fill_path = config.flags_scope().key("textStyle").key("fill");
    match data.get_path_mut(&fill_path) {
        Some(fill) if !fill.is_null() && !fill.is_array() => {
            let single = fill.take();
            *fill = Value::Array(vec![single]);
            true
        }
        _ => false,
    }
}

/// Handle a drawing about to be created
///
/// `source` is the host's plain-object copy of the new document. Returns the
/// cleaned source update, with deletion markers for every `null` flag.
pub fn pre_create(mut source: Payload, config: &HookConfig) -> Result<Payload> {
    source.root_mut()?;
    if preprocess(&mut source, config) {
        debug!(target: "drawflags::hooks", "wrapped scalar text fill on create");
    }
    let options = CleanOptions::new().deletion_keys(true);
    Ok(clean_data(&mut source, options).into_owned())
}

/// Handle a drawing update about to be committed
///
/// `changes` is the sparse update diff; it is cleaned in place and keeps any
/// deletion markers it already carries.
pub fn pre_update(changes: &mut Payload, config: &HookConfig) -> Result<()> {
    changes.root_mut()?;
    if preprocess(changes, config) {
        debug!(target: "drawflags::hooks", "wrapped scalar text fill on update");
    }
    let options = CleanOptions::new()
        .inplace(true)
        .deletion_keys(true)
        .partial(true);
    clean_data(changes, options);
    Ok(())
}

/// Whether a committed update requires redrawing the placed drawing
///
/// Unrendered drawings never refresh. Rendered ones refresh when the
/// module's flags were set or deleted, or when the text changed.
pub fn needs_refresh(rendered: bool, changes: &Payload, config: &HookConfig) -> bool {
    if !rendered {
        return false;
    }
    let flags_changed = changes
        .get("flags")
        .and_then(Value::as_object)
        .map_or(false, |flags| {
            flags.contains_key(&config.module_id)
                || flags.contains_key(&deletion_key(&config.module_id))
        });
    flags_changed || changes.get("text").is_some()
}
