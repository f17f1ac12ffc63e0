//! Error types for webpack-env operations.
//!
//! This module defines [`WebpackEnvError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolution itself never fails; errors only appear at the edges
//!   (reading the environment, loading settings, cleaning output, writing)
//! - Use `anyhow::Error` (via `WebpackEnvError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for webpack-env operations.
#[derive(Debug, Error)]
pub enum WebpackEnvError {
    /// A required environment input was absent or empty.
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    /// Deleting a previous build output failed.
    #[error("Failed to clean {path}: {source}")]
    CleanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A clean would reach outside the output root.
    #[error("Refusing to clean {path}: not a single output tree under the output root")]
    UnsafeCleanPath { path: PathBuf },

    /// Failed to parse the project settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// Failed to serialize the resolved configuration.
    #[error("Failed to serialize configuration: {message}")]
    Serialize { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WebpackEnvError {
    /// Process exit code for this error: 2 for missing inputs, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingVariable { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for webpack-env operations.
pub type Result<T> = std::result::Result<T, WebpackEnvError>;
