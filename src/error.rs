//! Error types for envcheck operations.
//!
//! This module defines [`EnvcheckError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing variable is not an error: checks report it through
//!   [`CheckResult`](crate::CheckResult). [`EnvcheckError::MissingVariables`]
//!   only exists for callers that opt into `?` via
//!   [`CheckResult::into_result`](crate::CheckResult::into_result)
//! - Env file problems carry the offending path
//! - Messages name variables, never their values

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvcheckError {
    /// One or more required variables were absent or empty.
    #[error("Missing required environment variables: {}", .missing.join(", "))]
    MissingVariables { missing: Vec<String> },

    /// Env file could not be read.
    #[error("Failed to read env file {path}: {source}")]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Env file contains a line that is not valid dotenv syntax.
    #[error("Failed to parse env file {path}: {message}")]
    EnvFileParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvcheckError>;
