//! drawflags: normalization core for drawing flag payloads
//!
//! Prepares nested drawing configuration data (texture transforms, text
//! fills, gradient stops, dash patterns) for persistence:
//!
//! - [`normalize`] coerces one leaf of a payload under a [`Policy`]
//! - [`PreSave`] runs the fixed field list and prunes the result once
//! - [`DrawingHooks`] wires both into the drawing sheet and document hooks
//!
//! ```
//! use drawflags::{normalize, MeasureCoercion, Payload, Policy};
//! use serde_json::json;
//!
//! let mut payload = Payload::from_value(json!({"a": {"b": {"c": [0, null]}}}));
//! normalize(&mut payload, &"a.b.c".parse().unwrap(), Policy::NumberArray, &MeasureCoercion).unwrap();
//! assert_eq!(payload["a"]["b"]["c"], json!([0, null]));
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;

pub use drawflags_core::{is_falsy, Error, Result};
pub use drawflags_engine::{
    clean_data, normalize, normalize_dotted, save_value, stringify_value, tracked_fields,
};
pub use drawflags_hooks::Error as HookError;
