//! Error types for the hook layer

use thiserror::Error;

/// Result type alias for hook handlers
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by hook handlers and configuration loading
#[derive(Debug, Error)]
pub enum Error {
    /// Payload or path rejected at the core boundary
    #[error(transparent)]
    Core(#[from] drawflags_core::Error),

    /// Configuration values are unusable
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration text is not valid TOML for [`crate::HookConfig`]
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Grid type code the host does not define
    #[error("unknown grid type {0}")]
    UnknownGridType(u8),
}
