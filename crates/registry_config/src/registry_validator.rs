//! Validation of completed registry configurations.
//!
//! Checks:
//! - `id` is not empty
//! - a descriptor is present and names an artifact
//! - enabled platforms name an artifact
//! - the update policy is one of `always`, `daily`, `never`, `interval:<minutes>`
//!
//! Warns about quarkus-versions settings that cannot take effect.
//!
//! # Examples
//!
//! ```rust
//! use registry_config::{ConfigurationValidator, RegistryConfig, RegistryConfigValidator};
//!
//! let validator = RegistryConfigValidator::new();
//! let result = validator.validate(&RegistryConfig::default());
//!
//! assert!(!result.is_valid());
//! for error in &result.errors {
//!     eprintln!("Validation error: {} - {}", error.field_path, error.message);
//! }
//! ```

use crate::{
    registry::{RegistryPlatformsConfig, RegistryQuarkusVersionsConfig},
    validator::{
        ConfigurationValidator, ValidationError, ValidationErrorType, ValidationResult,
        ValidationWarning,
    },
    RegistryConfig,
};
use tracing::{debug, warn};

#[cfg(test)]
#[path = "registry_validator_tests.rs"]
mod tests;

/// Default validator for completed registry configurations.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfigValidator;

impl RegistryConfigValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_id(&self, config: &RegistryConfig, result: &mut ValidationResult) {
        if config.id().trim().is_empty() {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::RequiredFieldMissing,
                field_path: "id".to_string(),
                message: "Registry id is missing".to_string(),
                suggestion: Some("Set id in the declared registry configuration".to_string()),
            });
        }
    }

    fn validate_descriptor(&self, config: &RegistryConfig, result: &mut ValidationResult) {
        match config.descriptor() {
            None => result.add_error(ValidationError {
                error_type: ValidationErrorType::RequiredFieldMissing,
                field_path: "descriptor".to_string(),
                message: "Registry descriptor is missing".to_string(),
                suggestion: Some(
                    "Declare a [descriptor] section with the descriptor artifact".to_string(),
                ),
            }),
            Some(descriptor) if descriptor.artifact().is_none() => {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::RequiredFieldMissing,
                    field_path: "descriptor.artifact".to_string(),
                    message: "Registry descriptor does not name an artifact".to_string(),
                    suggestion: Some(
                        "Use groupId:artifactId[:classifier]:type:version coordinates".to_string(),
                    ),
                })
            }
            Some(_) => {}
        }
    }

    fn validate_platforms(&self, platforms: &RegistryPlatformsConfig, result: &mut ValidationResult) {
        if !platforms.is_disabled() && platforms.artifact().is_none() {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::RequiredFieldMissing,
                field_path: "platforms.artifact".to_string(),
                message: "Platforms are enabled but no platform catalog artifact is known"
                    .to_string(),
                suggestion: Some("Set platforms.artifact or platforms.disabled = true".to_string()),
            });
        }
    }

    fn validate_update_policy(&self, policy: &str, result: &mut ValidationResult) {
        if !is_valid_update_policy(policy) {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: "update-policy".to_string(),
                message: format!("Unknown update policy '{}'", policy),
                suggestion: Some(
                    "Use always, daily, never or interval:<minutes>".to_string(),
                ),
            });
        }
    }

    fn validate_quarkus_versions(
        &self,
        versions: &RegistryQuarkusVersionsConfig,
        result: &mut ValidationResult,
    ) {
        if versions.recognized_group_ids().is_some_and(|ids| ids.is_empty()) {
            result.add_warning(ValidationWarning {
                field_path: "quarkus-versions.recognized-group-ids".to_string(),
                message: "Recognized group id list is empty".to_string(),
                recommendation: Some("Remove the key or list at least one group id".to_string()),
            });
        }

        if versions.exclusive_provider().unwrap_or(false)
            && versions.recognized_versions_expression().is_none()
            && versions.recognized_group_ids().map_or(true, |ids| ids.is_empty())
        {
            result.add_warning(ValidationWarning {
                field_path: "quarkus-versions.exclusive-provider".to_string(),
                message: "Exclusive provider without any recognized versions or group ids"
                    .to_string(),
                recommendation: Some(
                    "Set recognized-versions-expression or recognized-group-ids".to_string(),
                ),
            });
        }
    }
}

impl ConfigurationValidator for RegistryConfigValidator {
    fn validate(&self, config: &RegistryConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        self.validate_id(config, &mut result);
        self.validate_descriptor(config, &mut result);
        if let Some(platforms) = config.platforms() {
            self.validate_platforms(platforms, &mut result);
        }
        if let Some(policy) = config.update_policy() {
            self.validate_update_policy(policy, &mut result);
        }
        if let Some(versions) = config.quarkus_versions() {
            self.validate_quarkus_versions(versions, &mut result);
        }

        for warning in &result.warnings {
            warn!(registry = config.id(), "{}", warning);
        }
        debug!(
            registry = config.id(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Validated registry configuration"
        );

        result
    }
}

/// Accepts `always`, `daily`, `never` and `interval:<minutes>` with a
/// positive number of minutes.
pub fn is_valid_update_policy(policy: &str) -> bool {
    match policy {
        "always" | "daily" | "never" => true,
        other => other
            .strip_prefix("interval:")
            .and_then(|minutes| minutes.parse::<u64>().ok())
            .is_some_and(|minutes| minutes > 0),
    }
}
