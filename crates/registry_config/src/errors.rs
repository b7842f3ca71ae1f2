//! Registry configuration error types.
//!
//! Domain-specific errors for coordinate parsing, document loading
//! and post-merge validation. The merge itself never fails.

use thiserror::Error;

use crate::validator::ValidationError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Registry configuration errors.
///
/// These errors occur when parsing artifact coordinates, loading declared or
/// remote registry documents, or validating a completed configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid artifact coordinates '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to access configuration file: {path} - {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("Failed to parse {format} document: {reason}")]
    DocumentParseError { format: String, reason: String },

    #[error("Registry '{id}' is not declared")]
    RegistryNotFound { id: String },

    #[error("Registry configuration '{registry_id}' is incomplete: {error_count} error(s)")]
    IncompleteConfig {
        registry_id: String,
        error_count: usize,
        errors: Vec<ValidationError>,
    },
}

/// Result type alias for registry configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
