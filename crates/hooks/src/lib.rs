//! Drawing document hooks for drawflags
//!
//! Host-independent handlers for the drawing lifecycle:
//! - Sheet submit: dash pattern and tracked flag normalization
//! - Pre-create / pre-update: text fill repair and pruning
//! - Update: refresh decision
//! - Drawing layer: grid snapping precision
//! - Polygon mirroring along either axis
//!
//! All host state arrives as parameters; nothing here reads globals.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod drawing;
pub mod error;
pub mod flip;
pub mod grid;
pub mod submit;

pub use config::{DashDefaults, HookConfig, DEFAULT_MODULE_ID};
pub use document::{needs_refresh, pre_create, pre_update, preprocess};
pub use drawing::DrawingHooks;
pub use error::{Error, Result};
pub use flip::{flip_points, FlipAxis, POLYGON_SHAPE};
pub use grid::{grid_precision, GridState, GridType};
pub use submit::{prepare_submit_data, SubmitContext, DRAWING_DOCUMENT};
