use super::*;
use std::fs;
use tempfile::TempDir;

fn write_declared(dir: &TempDir, content: &str) -> ValidateArgs {
    let path = dir.path().join("registries.toml");
    fs::write(&path, content).unwrap();
    ValidateArgs { declared: path }
}

#[test]
fn test_validate_complete_declaration() {
    let dir = TempDir::new().unwrap();
    let args = write_declared(
        &dir,
        r#"
        [[registries]]
        id = "acme-registry"

        [registries.descriptor]
        artifact = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT"
        "#,
    );

    let report = execute(&args).unwrap();
    assert_eq!(report, "acme-registry: ok\n");
}

#[test]
fn test_validate_reports_failures() {
    let dir = TempDir::new().unwrap();
    let args = write_declared(
        &dir,
        r#"
        [[registries]]
        id = "acme-registry"

        [[registries]]
        id = "other-registry"
        update-policy = "sometimes"
        "#,
    );

    let err = execute(&args).unwrap_err();
    assert!(matches!(err, Error::ValidationFailed { count: 2 }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_validate_lists_warnings() {
    let dir = TempDir::new().unwrap();
    let args = write_declared(
        &dir,
        r#"
        [[registries]]
        id = "acme-registry"

        [registries.descriptor]
        artifact = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT"

        [registries.quarkus-versions]
        recognized-group-ids = []
        "#,
    );

    let report = execute(&args).unwrap();
    assert!(report.starts_with("acme-registry: ok\n"));
    assert!(report.contains("warning: quarkus-versions.recognized-group-ids"));
}

#[test]
fn test_validate_missing_file() {
    let dir = TempDir::new().unwrap();
    let args = ValidateArgs {
        declared: dir.path().join("absent.toml"),
    };

    let err = execute(&args).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}
