//! Error types for Stratum operations.
//!
//! This module defines [`StratumError`], the error type used for everything
//! that touches the filesystem or the command line, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Template resolution itself never fails: absence is expressed as an
//!   empty candidate list or an empty selection, never as an error
//! - Use `StratumError` for config and request loading problems
//! - Use `anyhow::Error` (via `StratumError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Stratum operations.
#[derive(Debug, Error)]
pub enum StratumError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Request description file not found.
    #[error("Request file not found: {path}")]
    RequestNotFound { path: PathBuf },

    /// Failed to parse a request description file.
    #[error("Failed to parse request at {path}: {message}")]
    RequestParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Stratum operations.
pub type Result<T> = std::result::Result<T, StratumError>;
