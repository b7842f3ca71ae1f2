//! Tests for the complete command.

use super::*;
use std::fs;
use tempfile::TempDir;
use tracing_test::traced_test;

const DECLARED: &str = r#"
[[registries]]
id = "acme-registry"
offerings = ["quarkus"]

[registries.descriptor]
artifact = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT"

[registries.platforms]
artifact = "org.acme.registry:acme-platforms::json:1.0-SNAPSHOT"

[[registries]]
id = "other-registry"
"#;

const REMOTE: &str = r#"{
    "id": "acme-registry",
    "platforms": {
        "artifact": "org.acme.registry:acme-platforms::json:1.0-SNAPSHOT",
        "extension-catalogs-included": true
    }
}"#;

fn write_files(dir: &TempDir, declared: &str, remote: &str) -> CompleteArgs {
    let declared_path = dir.path().join("registries.toml");
    let remote_path = dir.path().join("descriptor.json");
    fs::write(&declared_path, declared).unwrap();
    fs::write(&remote_path, remote).unwrap();

    CompleteArgs {
        declared: declared_path,
        remote: remote_path,
        registry: None,
        validate: false,
        trace: false,
    }
}

#[test]
fn test_complete_selects_registry_by_descriptor_id() {
    let dir = TempDir::new().unwrap();
    let args = write_files(&dir, DECLARED, REMOTE);

    let output = execute(&args).expect("complete should succeed");
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["id"], "acme-registry");
    assert_eq!(value["platforms"]["extension-catalogs-included"], true);
    assert_eq!(value["offerings"], serde_json::json!(["quarkus"]));
}

#[test]
fn test_complete_with_validation() {
    let dir = TempDir::new().unwrap();
    let mut args = write_files(&dir, DECLARED, REMOTE);
    args.validate = true;

    assert!(execute(&args).is_ok());
}

#[test]
fn test_complete_validation_failure() {
    let dir = TempDir::new().unwrap();
    let mut args = write_files(&dir, DECLARED, r#"{ "id": "other-registry" }"#);
    args.validate = true;

    let err = execute(&args).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_complete_trace_output() {
    let dir = TempDir::new().unwrap();
    let mut args = write_files(&dir, DECLARED, REMOTE);
    args.trace = true;

    let output = execute(&args).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value["sources"]["platforms.extension-catalogs-included"],
        "remote"
    );
    assert_eq!(value["sources"]["descriptor"], "declared");
}

#[test]
fn test_complete_unknown_registry() {
    let dir = TempDir::new().unwrap();
    let mut args = write_files(&dir, DECLARED, REMOTE);
    args.registry = Some("missing".to_string());

    let err = execute(&args).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigurationError::RegistryNotFound { .. })
    ));
}

#[test]
fn test_select_single_registry_without_id() {
    let registries = vec![RegistryConfig::builder().id("only").build()];
    let selected = select_registry(registries, None, &RegistryConfig::default()).unwrap();
    assert_eq!(selected.id(), "only");
}

#[test]
fn test_select_ambiguous_without_id() {
    let registries = vec![
        RegistryConfig::builder().id("a").build(),
        RegistryConfig::builder().id("b").build(),
    ];
    let err = select_registry(registries, None, &RegistryConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));
}

#[test]
fn test_explicit_id_beats_descriptor_id() {
    let registries = vec![
        RegistryConfig::builder().id("a").build(),
        RegistryConfig::builder().id("b").build(),
    ];
    let remote = RegistryConfig::builder().id("a").build();
    let selected = select_registry(registries, Some("b"), &remote).unwrap();
    assert_eq!(selected.id(), "b");
}

#[test]
#[traced_test]
fn test_complete_validation_warning_logged_once() {
    let dir = TempDir::new().unwrap();
    let mut args = write_files(
        &dir,
        r#"
        [[registries]]
        id = "acme-registry"

        [registries.descriptor]
        artifact = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT"

        [registries.quarkus-versions]
        recognized-group-ids = []
        "#,
        r#"{ "id": "acme-registry" }"#,
    );
    args.validate = true;

    assert!(execute(&args).is_ok());
    logs_assert(|lines: &[&str]| {
        let count = lines
            .iter()
            .filter(|line| line.contains("Recognized group id list is empty"))
            .count();
        match count {
            1 => Ok(()),
            n => Err(format!("expected the warning once, found {n} times")),
        }
    });
}
