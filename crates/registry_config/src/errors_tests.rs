//! Tests for registry configuration error types.

use super::*;
use crate::validator::ValidationErrorType;

#[test]
fn parse_error_display_includes_input_and_reason() {
    let error = ConfigurationError::ParseError {
        input: "org.acme".to_string(),
        reason: "expected at least 3 segments".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Invalid artifact coordinates 'org.acme': expected at least 3 segments"
    );
}

#[test]
fn document_parse_error_display_names_format() {
    let error = ConfigurationError::DocumentParseError {
        format: "JSON".to_string(),
        reason: "expected value at line 1".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Failed to parse JSON document: expected value at line 1"
    );
}

#[test]
fn registry_not_found_display() {
    let error = ConfigurationError::RegistryNotFound {
        id: "acme-registry".to_string(),
    };
    assert_eq!(error.to_string(), "Registry 'acme-registry' is not declared");
}

#[test]
fn incomplete_config_carries_validation_errors() {
    let error = ConfigurationError::IncompleteConfig {
        registry_id: "acme-registry".to_string(),
        error_count: 1,
        errors: vec![ValidationError {
            error_type: ValidationErrorType::RequiredFieldMissing,
            field_path: "descriptor".to_string(),
            message: "Registry descriptor is missing".to_string(),
            suggestion: None,
        }],
    };

    assert_eq!(
        error.to_string(),
        "Registry configuration 'acme-registry' is incomplete: 1 error(s)"
    );
    match error {
        ConfigurationError::IncompleteConfig { errors, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field_path, "descriptor");
        }
        _ => panic!("Expected IncompleteConfig"),
    }
}

#[test]
fn errors_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigurationError>();
}
