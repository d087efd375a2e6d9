//! Pre-save fan-out
//!
//! Normalizes the fixed list of tracked drawing fields, then runs the prune
//! pass once. The tracked paths are pairwise disjoint, so the order they are
//! visited in does not change the result.

use crate::coerce::{MeasureCoercion, SaveCoercion};
use crate::normalize::{normalize, Policy};
use crate::prune::{clean_in_place, CleanOptions};
use drawflags_core::{FlagPath, Payload, Result};
use once_cell::sync::Lazy;

/// A field normalized before every save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedField {
    /// Path relative to the fan-out scope
    pub path: FlagPath,
    /// Leaf policy applied to it
    pub policy: Policy,
}

const FIELD_TABLE: &[(&[&str], Policy)] = &[
    (&["fillStyle", "texture", "width"], Policy::ScalarSave),
    (&["fillStyle", "texture", "height"], Policy::ScalarSave),
    (&["fillStyle", "transform", "position", "x"], Policy::ScalarSave),
    (&["fillStyle", "transform", "position", "y"], Policy::ScalarSave),
    (&["fillStyle", "transform", "pivot", "x"], Policy::ScalarSave),
    (&["fillStyle", "transform", "pivot", "y"], Policy::ScalarSave),
    (&["textStyle", "wordWrapWidth"], Policy::ScalarSave),
    (&["textStyle", "fill"], Policy::StringArray),
    (&["textStyle", "fillGradientStops"], Policy::NumberArray),
];

static TRACKED_FIELDS: Lazy<Vec<TrackedField>> = Lazy::new(|| {
    FIELD_TABLE
        .iter()
        .map(|(segments, policy)| TrackedField {
            path: FlagPath::from_segments(segments.iter().map(|s| s.to_string()).collect()),
            policy: *policy,
        })
        .collect()
});

/// The tracked fields, in the order [`PreSave`] visits them
pub fn tracked_fields() -> &'static [TrackedField] {
    &TRACKED_FIELDS
}

/// Prepares a payload for persistence
///
/// # Example
///
/// ```
/// use drawflags_core::{FlagPath, Payload};
/// use drawflags_engine::PreSave;
///
/// let mut payload: Payload = r#"{"flags": {"m": {"textStyle": {"fill": "red"}}}}"#.parse().unwrap();
/// PreSave::new()
///     .scoped(FlagPath::root().key("flags").key("m"))
///     .apply(&mut payload)
///     .unwrap();
///
/// assert_eq!(payload["flags"]["m"]["textStyle"]["fill"][0], "red");
/// ```
#[derive(Debug, Clone)]
pub struct PreSave<C = MeasureCoercion> {
    scope: FlagPath,
    coercion: C,
    clean: CleanOptions,
}

impl PreSave<MeasureCoercion> {
    /// Fan-out at the payload root with the default measure coercion
    pub fn new() -> Self {
        Self {
            scope: FlagPath::root(),
            coercion: MeasureCoercion,
            clean: CleanOptions::new()
                .deletion_keys(true)
                .inplace(true)
                .partial(true),
        }
    }
}

impl Default for PreSave<MeasureCoercion> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SaveCoercion> PreSave<C> {
    /// Resolve tracked paths below `scope` (e.g. `flags.<module-id>`)
    pub fn scoped(mut self, scope: FlagPath) -> Self {
        self.scope = scope;
        self
    }

    /// Swap the save coercion used for scalar fields
    pub fn with_coercion<D: SaveCoercion>(self, coercion: D) -> PreSave<D> {
        PreSave {
            scope: self.scope,
            coercion,
            clean: self.clean,
        }
    }

    /// The scope tracked paths are resolved under
    pub fn scope(&self) -> &FlagPath {
        &self.scope
    }

    /// Normalize every tracked field, then prune once
    ///
    /// Returns the same payload for chaining.
    pub fn apply<'p>(&self, payload: &'p mut Payload) -> Result<&'p mut Payload> {
        self.normalize_fields(payload, tracked_fields())?;
        clean_in_place(payload, self.clean);
        Ok(payload)
    }

    /// Normalize `fields` in the given order without pruning
    pub fn normalize_fields<'f>(
        &self,
        payload: &mut Payload,
        fields: impl IntoIterator<Item = &'f TrackedField>,
    ) -> Result<()> {
        for field in fields {
            let path = self.scope.join(&field.path);
            normalize(payload, &path, field.policy, &self.coercion)?;
        }
        Ok(())
    }
}
