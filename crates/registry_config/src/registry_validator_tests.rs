//! Tests for RegistryConfigValidator.

use super::*;
use crate::registry::RegistryDescriptorConfig;
use crate::{ArtifactCoords, ConfigurationError};

fn valid_config() -> RegistryConfig {
    RegistryConfig::builder()
        .id("acme-registry")
        .descriptor(
            RegistryDescriptorConfig::builder()
                .artifact(
                    ArtifactCoords::parse("org.acme.registry:acme-registry-descriptor::json:1.0")
                        .unwrap(),
                )
                .build(),
        )
        .build()
}

fn error_paths(result: &ValidationResult) -> Vec<&str> {
    result.errors.iter().map(|e| e.field_path.as_str()).collect()
}

#[test]
fn test_valid_config_passes() {
    let result = RegistryConfigValidator::new().validate(&valid_config());
    assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_empty_config_reports_all_missing_fields() {
    let result = RegistryConfigValidator::new().validate(&RegistryConfig::default());
    assert_eq!(error_paths(&result), vec!["id", "descriptor"]);
    assert!(result
        .errors
        .iter()
        .all(|e| e.error_type == ValidationErrorType::RequiredFieldMissing));
}

#[test]
fn test_blank_id_is_missing() {
    let config = valid_config().to_builder().id("  ").build();
    let result = RegistryConfigValidator::new().validate(&config);
    assert_eq!(error_paths(&result), vec!["id"]);
}

#[test]
fn test_descriptor_without_artifact() {
    let config = valid_config()
        .to_builder()
        .descriptor(RegistryDescriptorConfig::default())
        .build();
    let result = RegistryConfigValidator::new().validate(&config);
    assert_eq!(error_paths(&result), vec!["descriptor.artifact"]);
}

#[test]
fn test_enabled_platforms_need_artifact() {
    let config = valid_config()
        .to_builder()
        .platforms(RegistryPlatformsConfig::default())
        .build();
    let result = RegistryConfigValidator::new().validate(&config);
    assert_eq!(error_paths(&result), vec!["platforms.artifact"]);
}

#[test]
fn test_disabled_platforms_need_no_artifact() {
    let config = valid_config()
        .to_builder()
        .platforms(RegistryPlatformsConfig::builder().disabled(true).build())
        .build();
    assert!(RegistryConfigValidator::new().validate(&config).is_valid());
}

#[test]
fn test_update_policies() {
    assert!(is_valid_update_policy("always"));
    assert!(is_valid_update_policy("daily"));
    assert!(is_valid_update_policy("never"));
    assert!(is_valid_update_policy("interval:60"));
    assert!(!is_valid_update_policy("interval:0"));
    assert!(!is_valid_update_policy("interval:soon"));
    assert!(!is_valid_update_policy("weekly"));
}

#[test]
fn test_invalid_update_policy_is_error() {
    let config = valid_config().to_builder().update_policy("weekly").build();
    let result = RegistryConfigValidator::new().validate(&config);
    assert_eq!(error_paths(&result), vec!["update-policy"]);
    assert_eq!(result.errors[0].error_type, ValidationErrorType::InvalidValue);
}

#[test]
fn test_exclusive_provider_without_recognition_warns() {
    let config = valid_config()
        .to_builder()
        .quarkus_versions(
            RegistryQuarkusVersionsConfig::builder()
                .exclusive_provider(true)
                .build(),
        )
        .build();
    let result = RegistryConfigValidator::new().validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        result.warnings[0].field_path,
        "quarkus-versions.exclusive-provider"
    );
}

#[test]
fn test_empty_group_id_list_warns() {
    let config = valid_config()
        .to_builder()
        .quarkus_versions(
            RegistryQuarkusVersionsConfig::builder()
                .recognized_versions_expression("*acme*")
                .recognized_group_ids(Vec::<String>::new())
                .exclusive_provider(true)
                .build(),
        )
        .build();
    let result = RegistryConfigValidator::new().validate(&config);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        result.warnings[0].field_path,
        "quarkus-versions.recognized-group-ids"
    );
}

#[test]
fn test_ensure_complete_raises_incomplete_config() {
    let config = RegistryConfig::builder().id("acme-registry").build();
    let err = RegistryConfigValidator::new()
        .ensure_complete(&config)
        .unwrap_err();
    match err {
        ConfigurationError::IncompleteConfig {
            registry_id,
            error_count,
            errors,
        } => {
            assert_eq!(registry_id, "acme-registry");
            assert_eq!(error_count, 1);
            assert_eq!(errors[0].field_path, "descriptor");
        }
        other => panic!("Expected IncompleteConfig, got {:?}", other),
    }
}

#[test]
fn test_ensure_complete_accepts_valid_config() {
    let warnings = RegistryConfigValidator::new()
        .ensure_complete(&valid_config())
        .expect("valid config");
    assert!(warnings.is_empty());
}
