//! Hook configuration
//!
//! Everything the handlers would otherwise read from ambient host state
//! (module id, form defaults) is carried here and passed explicitly.
//!
//! ```toml
//! module_id = "advanced-drawing-tools"
//!
//! [dash]
//! dash = 8.0
//! gap = 5.0
//! ```

use crate::{Error, Result};
use drawflags_core::{Error as CoreError, FlagPath};
use serde::{Deserialize, Serialize};

/// Flag namespace the extension writes under
pub const DEFAULT_MODULE_ID: &str = "advanced-drawing-tools";

/// Fallback dash pattern when the form leaves a length empty or zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashDefaults {
    /// Dash length in pixels
    pub dash: f64,
    /// Gap length in pixels
    pub gap: f64,
}

impl Default for DashDefaults {
    fn default() -> Self {
        Self { dash: 8.0, gap: 5.0 }
    }
}

/// Configuration shared by all hook handlers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Flag namespace (`flags.<module_id>`)
    pub module_id: String,
    /// Dash pattern defaults
    pub dash: DashDefaults,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            module_id: DEFAULT_MODULE_ID.to_string(),
            dash: DashDefaults::default(),
        }
    }
}

impl HookConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag namespace
    pub fn module_id(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = module_id.into();
        self
    }

    /// Set the dash pattern defaults
    pub fn dash_defaults(mut self, dash: DashDefaults) -> Self {
        self.dash = dash;
        self
    }

    /// Parse and validate a TOML configuration; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: HookConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the module id is a single path segment and dash lengths are positive
    ///
    /// A module id that is not a valid key fails as [`Error::Core`] carrying
    /// the path error; a dotted or empty one fails as [`Error::Config`].
    pub fn validate(&self) -> Result<()> {
        let parsed: FlagPath = self
            .module_id
            .parse()
            .map_err(|e| CoreError::from_parse(&self.module_id, e))?;
        if parsed.len() != 1 {
            return Err(Error::Config(format!(
                "module_id '{}' must be a single key",
                self.module_id
            )));
        }
        for (name, value) in [("dash", self.dash.dash), ("gap", self.dash.gap)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!(
                    "dash.{} must be a positive length, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// `flags.<module_id>`
    pub fn flags_scope(&self) -> FlagPath {
        FlagPath::root().key("flags").key(self.module_id.as_str())
    }
}
