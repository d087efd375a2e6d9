//! Normalization engine for drawflags
//!
//! This crate contains:
//! - `normalize`: nested-path value normalizer with its three leaf policies
//! - `coerce`: save coercion for measure fields (pixels / percent)
//! - `prune`: deep-clean pass with deletion markers
//! - `fanout`: the fixed pre-save field list and its driver

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod fanout;
pub mod normalize;
pub mod prune;

pub use coerce::{
    number_value, save_value, stringify_value, Measure, MeasureCoercion, MeasureParseError,
    SaveCoercion,
};
pub use fanout::{tracked_fields, PreSave, TrackedField};
pub use normalize::{normalize, normalize_dotted, vivify, Policy};
pub use prune::{
    clean_data, clean_in_place, deletion_key, CleanOptions, CleanStats, DELETION_PREFIX,
};
