//! Drawing hook facade
//!
//! Stateless facade over the hook handlers: holds only the configuration, so
//! a host registers one `DrawingHooks` and forwards each lifecycle callback.
//!
//! # Example
//!
//! ```
//! use drawflags_core::Payload;
//! use drawflags_hooks::{DrawingHooks, HookConfig, SubmitContext};
//!
//! let hooks = DrawingHooks::new(HookConfig::new());
//! let form: Payload = r#"{"flags": {"advanced-drawing-tools": {"textStyle": {"fill": "red"}}}}"#
//!     .parse()
//!     .unwrap();
//!
//! let data = hooks.prepare_submit_data(&SubmitContext::drawing(false), form).unwrap();
//! assert_eq!(data["flags"]["advanced-drawing-tools"]["textStyle"]["fill"][0], "red");
//! ```

use crate::config::HookConfig;
use crate::flip::{flip_points, FlipAxis};
use crate::grid::{grid_precision, GridState};
use crate::submit::SubmitContext;
use crate::{document, submit, Result};
use drawflags_core::Payload;

/// Hook handlers bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct DrawingHooks {
    config: HookConfig,
}

impl DrawingHooks {
    /// Create the facade
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }

    /// See [`submit::prepare_submit_data`]
    pub fn prepare_submit_data(&self, ctx: &SubmitContext, data: Payload) -> Result<Payload> {
        submit::prepare_submit_data(ctx, data, &self.config)
    }

    /// See [`document::pre_create`]
    pub fn pre_create(&self, source: Payload) -> Result<Payload> {
        document::pre_create(source, &self.config)
    }

    /// See [`document::pre_update`]
    pub fn pre_update(&self, changes: &mut Payload) -> Result<()> {
        document::pre_update(changes, &self.config)
    }

    /// See [`document::needs_refresh`]
    pub fn needs_refresh(&self, rendered: bool, changes: &Payload) -> bool {
        document::needs_refresh(rendered, changes, &self.config)
    }

    /// See [`grid_precision`]
    pub fn grid_precision(&self, grid: &GridState) -> u32 {
        grid_precision(grid)
    }

    /// See [`flip_points`]
    pub fn flip_points(&self, document: &Payload, axis: FlipAxis) -> Option<Payload> {
        flip_points(document, axis)
    }
}
