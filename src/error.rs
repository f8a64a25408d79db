//! Error types for stackname operations.
//!
//! This module defines [`StacknameError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolution of individual context fields never fails; missing values
//!   fall back to documented defaults
//! - A structurally absent deployment context, an empty base name, or an
//!   invalid root domain is rejected as early as possible
//! - Use `anyhow::Error` (via `StacknameError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stackname operations.
#[derive(Debug, Error)]
pub enum StacknameError {
    /// No deployment context could be obtained at all.
    #[error("No deployment context: {hint}")]
    ContextMissing { hint: String },

    /// A context file exists but is not valid JSON.
    #[error("Failed to parse context at {path}: {message}")]
    ContextParseError { path: PathBuf, message: String },

    /// A `--context` argument was not of the form `key=value`.
    #[error("Invalid context override '{value}': expected key=value")]
    InvalidContextOverride { value: String },

    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A domain name that cannot be used to derive DNS names.
    #[error("Invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },

    /// A name was requested for an empty base name.
    #[error("Base name must not be empty")]
    EmptyBaseName,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StacknameError {
    /// Exit code the CLI should use for this error.
    ///
    /// Missing or unusable configuration exits with 2, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ContextMissing { .. }
            | Self::ContextParseError { .. }
            | Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidDomain { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for stackname operations.
pub type Result<T> = std::result::Result<T, StacknameError>;
