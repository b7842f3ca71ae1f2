//! Validation types and trait.
//!
//! Validation runs after completion and decides whether a registry
//! configuration can be used. It collects every problem in one pass rather
//! than stopping at the first.
//!
//! # Examples
//!
//! ```rust
//! use registry_config::{ValidationResult, ValidationError, ValidationErrorType};
//!
//! let mut result = ValidationResult::new();
//!
//! result.add_error(ValidationError {
//!     error_type: ValidationErrorType::RequiredFieldMissing,
//!     field_path: "descriptor".to_string(),
//!     message: "Registry descriptor is missing".to_string(),
//!     suggestion: Some("Declare [descriptor] artifact = \"...\"".to_string()),
//! });
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors.len(), 1);
//! ```

use crate::{ConfigurationError, ConfigurationResult, RegistryConfig};

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

/// Result of configuration validation.
///
/// Validation is considered successful only if no errors are present;
/// warnings never block.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Blocking issues.
    pub errors: Vec<ValidationError>,
    /// Non-blocking suggestions.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turns a failed validation into `ConfigurationError::IncompleteConfig`.
    pub fn into_result(self, registry_id: &str) -> ConfigurationResult<Vec<ValidationWarning>> {
        if self.is_valid() {
            return Ok(self.warnings);
        }

        Err(ConfigurationError::IncompleteConfig {
            registry_id: registry_id.to_string(),
            error_count: self.errors.len(),
            errors: self.errors,
        })
    }
}

/// Individual validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The category of validation error.
    pub error_type: ValidationErrorType,
    /// Dot-separated path to the field that failed validation.
    pub field_path: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// Validation error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorType {
    /// A required field is missing or empty.
    RequiredFieldMissing,
    /// A field value is not acceptable.
    InvalidValue,
}

impl std::fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredFieldMissing => write!(f, "RequiredFieldMissing"),
            Self::InvalidValue => write!(f, "InvalidValue"),
        }
    }
}

/// Non-blocking validation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Dot-separated path to the field that triggered the warning.
    pub field_path: String,
    /// Human-readable warning message.
    pub message: String,
    /// Optional recommendation.
    pub recommendation: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// Registry configuration validation service.
///
/// Implementations check a completed configuration and report all errors
/// and warnings found.
pub trait ConfigurationValidator: Send + Sync {
    /// Validate a completed registry configuration.
    fn validate(&self, config: &RegistryConfig) -> ValidationResult;

    /// Validate and fail with `ConfigurationError::IncompleteConfig` if any
    /// error was found. Returns the warnings otherwise.
    fn ensure_complete(
        &self,
        config: &RegistryConfig,
    ) -> ConfigurationResult<Vec<ValidationWarning>> {
        self.validate(config).into_result(config.id())
    }
}
