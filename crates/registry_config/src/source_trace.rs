//! Source tracing for completed registry configurations.
//!
//! Records, per populated field, whether the completed value came from the
//! declared configuration or from the remote registry descriptor. Fields that
//! ended up unset have no entry.
//!
//! # Examples
//!
//! ```rust
//! use registry_config::{ConfigurationSource, ConfigurationSourceTrace};
//!
//! let mut trace = ConfigurationSourceTrace::new();
//! trace.add_source("platforms.artifact", ConfigurationSource::Declared);
//! trace.add_source("platforms.extension-catalogs-included", ConfigurationSource::Remote);
//!
//! assert_eq!(trace.get_source("platforms.artifact"), Some(ConfigurationSource::Declared));
//! assert_eq!(trace.get_source("quarkus-versions"), None);
//! ```

use crate::RegistryConfig;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "source_trace_tests.rs"]
mod tests;

/// Where a completed field value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigurationSource {
    /// The user-declared registry configuration.
    Declared,

    /// The configuration fetched from the registry descriptor.
    Remote,
}

impl std::fmt::Display for ConfigurationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationSource::Declared => write!(f, "Declared"),
            ConfigurationSource::Remote => write!(f, "Remote"),
        }
    }
}

/// Tracks which configuration source provided each completed field.
///
/// Field paths use the document key names, dot-separated
/// (e.g. `quarkus-versions.recognized-group-ids`).
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct ConfigurationSourceTrace {
    sources: BTreeMap<String, ConfigurationSource>,
}

impl ConfigurationSourceTrace {
    pub fn new() -> Self {
        Self {
            sources: BTreeMap::new(),
        }
    }

    /// Records the source of a field, replacing any earlier entry.
    pub fn add_source(&mut self, field_path: &str, source: ConfigurationSource) {
        self.sources.insert(field_path.to_string(), source);
    }

    pub fn get_source(&self, field_path: &str) -> Option<ConfigurationSource> {
        self.sources.get(field_path).copied()
    }

    /// Returns all traced field paths in sorted order.
    pub fn configured_fields(&self) -> Vec<&str> {
        self.sources.keys().map(|s| s.as_str()).collect()
    }

    pub fn field_count(&self) -> usize {
        self.sources.len()
    }

    /// Field paths that were filled in from the remote descriptor.
    pub fn remote_fields(&self) -> Vec<&str> {
        self.sources
            .iter()
            .filter(|(_, source)| **source == ConfigurationSource::Remote)
            .map(|(path, _)| path.as_str())
            .collect()
    }
}

/// A completed registry configuration together with its source trace.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CompletedRegistryConfig {
    pub config: RegistryConfig,
    pub source_trace: ConfigurationSourceTrace,
}

impl CompletedRegistryConfig {
    /// Drop the trace and keep the configuration.
    pub fn into_config(self) -> RegistryConfig {
        self.config
    }
}
