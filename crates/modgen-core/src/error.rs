//! Error handling for the Modgen scaffolding library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! # Examples
//!
//! ```
//! use modgen_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for Modgen scaffolding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Modgen scaffolding operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The destination directory already exists
    #[error("destination already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// The `src/modules` directory required for module-scoped placement is missing
    #[error("modules directory not found at {}; create a module first", path.display())]
    ModulesDirectoryMissing { path: PathBuf },

    /// The selected module vanished between listing and selection
    #[error("module '{name}' not found")]
    ModuleNotFound { name: String },

    /// A required template file could not be read
    #[error("failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The user aborted an interactive prompt
    #[error("operation cancelled")]
    Cancelled,

    /// A resource name that cannot be scaffolded
    #[error("invalid resource name: {0}")]
    InvalidName(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid-name error
    pub fn invalid_name<S: Into<String>>(msg: S) -> Self {
        Self::InvalidName(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
