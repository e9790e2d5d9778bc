//! Error types for environment info collection.
//!
//! This module defines [`EnvInfoError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Process, parse and config failures abort the report and reach `main`
//! - Version parse failures are recovered by the formatter
//! - Use `anyhow::Error` (via `EnvInfoError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for environment info collection.
#[derive(Debug, Error)]
pub enum EnvInfoError {
    /// Shell command could not be spawned or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Shell command produced more standard output than allowed.
    #[error("Output of '{command}' exceeded {limit} bytes")]
    OutputTooLarge { command: String, limit: usize },

    /// Command output was not JSON of the expected shape.
    #[error("Failed to parse output of '{source_command}': {message}")]
    ParseError {
        source_command: String,
        message: String,
    },

    /// A version string is not a valid semantic version.
    #[error("Invalid version '{version}': {message}")]
    VersionParse { version: String, message: String },

    /// Failed to parse the project config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for environment info operations.
pub type Result<T> = std::result::Result<T, EnvInfoError>;
