//! Loading of declared and remote registry documents.
//!
//! Declared registries come from a TOML file with one `[[registries]]`
//! table per registry. The remote side is the JSON registry descriptor
//! document, already fetched by the caller, holding a single registry.
//!
//! ```toml
//! [[registries]]
//! id = "acme-registry"
//!
//! [registries.descriptor]
//! artifact = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT"
//! ```

use crate::{ConfigurationError, ConfigurationResult, RegistryConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Top-level layout of a declared registries file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistriesDocument {
    #[serde(default)]
    pub registries: Vec<RegistryConfig>,
}

/// Parse declared registries from TOML text.
///
/// # Errors
///
/// Returns `ConfigurationError::DocumentParseError` on invalid TOML or a
/// document that does not match the registry schema, including malformed
/// artifact coordinates.
pub fn parse_declared_registries(content: &str) -> ConfigurationResult<Vec<RegistryConfig>> {
    let document: RegistriesDocument =
        toml::from_str(content).map_err(|e| ConfigurationError::DocumentParseError {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;

    debug!(count = document.registries.len(), "Parsed declared registries");
    Ok(document.registries)
}

/// Load declared registries from a TOML file.
pub fn load_declared_registries(path: &Path) -> ConfigurationResult<Vec<RegistryConfig>> {
    let content = read_document(path)?;
    let registries = parse_declared_registries(&content)?;

    info!(path = %path.display(), count = registries.len(), "Loaded declared registries");
    Ok(registries)
}

/// Load the declared registry with the given id from a TOML file.
///
/// # Errors
///
/// Returns `ConfigurationError::RegistryNotFound` if no registry in the file
/// has that id.
pub fn find_declared_registry(path: &Path, id: &str) -> ConfigurationResult<RegistryConfig> {
    load_declared_registries(path)?
        .into_iter()
        .find(|registry| registry.id() == id)
        .ok_or_else(|| ConfigurationError::RegistryNotFound { id: id.to_string() })
}

/// Parse a remote registry descriptor from JSON text.
pub fn parse_remote_descriptor(content: &str) -> ConfigurationResult<RegistryConfig> {
    serde_json::from_str(content).map_err(|e| ConfigurationError::DocumentParseError {
        format: "JSON".to_string(),
        reason: e.to_string(),
    })
}

/// Load a remote registry descriptor from a JSON file.
pub fn load_remote_descriptor(path: &Path) -> ConfigurationResult<RegistryConfig> {
    let content = read_document(path)?;
    let descriptor = parse_remote_descriptor(&content)?;

    info!(path = %path.display(), registry = descriptor.id(), "Loaded registry descriptor");
    Ok(descriptor)
}

fn read_document(path: &Path) -> ConfigurationResult<String> {
    debug!("Reading registry document from {:?}", path);

    if !path.exists() {
        return Err(ConfigurationError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    fs::read_to_string(path).map_err(|e| ConfigurationError::FileAccessError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
