//! Public types for the drawflags API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Payload model
// ============================================================================

pub use drawflags_core::{FlagPath, Payload, PathParseError};

// ============================================================================
// Normalization
// ============================================================================

pub use drawflags_engine::{
    CleanOptions, CleanStats, Measure, MeasureCoercion, Policy, PreSave, SaveCoercion,
    TrackedField,
};

// ============================================================================
// Hooks and configuration
// ============================================================================

pub use drawflags_hooks::{
    DashDefaults, DrawingHooks, FlipAxis, GridState, GridType, HookConfig, SubmitContext,
};
