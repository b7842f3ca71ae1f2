//! Registry configuration.
//!
//! `RegistryConfig` is the frozen, read-only configuration of one extension
//! registry. It is staged through [`RegistryConfigBuilder`] and produced by
//! a single `build()` call, both when a caller assembles it by hand and when
//! the completion step merges a declared configuration with the one fetched
//! from the registry descriptor.
//!
//! # Document Format
//!
//! The same shape is used for declared TOML and remote JSON documents, with
//! kebab-case keys. Keys that are not part of the schema are kept verbatim
//! in [`RegistryConfig::extra`]:
//!
//! ```toml
//! id = "acme-registry"
//! update-policy = "daily"
//! offerings = ["quarkus", "camel-quarkus"]   # lands in extra
//!
//! [descriptor]
//! artifact = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT"
//!
//! [platforms]
//! artifact = "org.acme.registry:acme-platforms::json:1.0-SNAPSHOT"
//! extension-catalogs-included = true
//!
//! [quarkus-versions]
//! recognized-versions-expression = "*acme*"
//! recognized-group-ids = ["org.acme"]
//! exclusive-provider = true
//! ```

use crate::registry::{
    RegistryDescriptorConfig, RegistryMavenConfig, RegistryNonPlatformExtensionsConfig,
    RegistryPlatformsConfig, RegistryQuarkusVersionsConfig,
};
use crate::Setting;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

#[cfg(test)]
#[path = "registry_config_tests.rs"]
mod tests;

/// Free-form registry metadata, keyed by name.
pub type ExtraMetadata = BTreeMap<String, serde_json::Value>;

/// Document keys owned by the registry schema. Extra metadata is flattened
/// next to them, so it can never use one of these names.
pub const RESERVED_KEYS: &[&str] = &[
    "id",
    "enabled",
    "update-policy",
    "descriptor",
    "platforms",
    "non-platform-extensions",
    "maven",
    "quarkus-versions",
];

/// Frozen configuration of a single registry.
///
/// # Examples
///
/// ```rust
/// use registry_config::{ArtifactCoords, RegistryConfig, RegistryDescriptorConfig};
///
/// let config = RegistryConfig::builder()
///     .id("acme-registry")
///     .descriptor(
///         RegistryDescriptorConfig::builder()
///             .artifact(ArtifactCoords::parse("org.acme.registry:acme-registry-descriptor::json:1.0")?)
///             .build(),
///     )
///     .build();
///
/// assert_eq!(config.id(), "acme-registry");
/// assert!(config.platforms().is_none());
/// assert!(config.is_enabled());
/// # Ok::<(), registry_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryConfig {
    #[serde(default)]
    id: String,

    #[serde(default, skip_serializing_if = "Setting::is_unset")]
    enabled: Setting<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    update_policy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    descriptor: Option<RegistryDescriptorConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    platforms: Option<RegistryPlatformsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    non_platform_extensions: Option<RegistryNonPlatformExtensionsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    maven: Option<RegistryMavenConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    quarkus_versions: Option<RegistryQuarkusVersionsConfig>,

    #[serde(flatten)]
    extra: ExtraMetadata,
}

impl RegistryConfig {
    /// Start staging a new registry configuration.
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }

    /// Copy this configuration into a builder.
    pub fn to_builder(&self) -> RegistryConfigBuilder {
        RegistryConfigBuilder {
            id: self.id.clone(),
            enabled: self.enabled,
            update_policy: self.update_policy.clone(),
            descriptor: self.descriptor.clone(),
            platforms: self.platforms.clone(),
            non_platform_extensions: self.non_platform_extensions.clone(),
            maven: self.maven.clone(),
            quarkus_versions: self.quarkus_versions.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Stable identity of the registry. Empty when not specified.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn enabled(&self) -> Setting<bool> {
        self.enabled
    }

    /// Whether the registry is enabled. Unset means enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// How often cached registry data is refreshed (`always`, `daily`,
    /// `never` or `interval:<minutes>`).
    pub fn update_policy(&self) -> Option<&str> {
        self.update_policy.as_deref()
    }

    pub fn descriptor(&self) -> Option<&RegistryDescriptorConfig> {
        self.descriptor.as_ref()
    }

    pub fn platforms(&self) -> Option<&RegistryPlatformsConfig> {
        self.platforms.as_ref()
    }

    pub fn non_platform_extensions(&self) -> Option<&RegistryNonPlatformExtensionsConfig> {
        self.non_platform_extensions.as_ref()
    }

    pub fn maven(&self) -> Option<&RegistryMavenConfig> {
        self.maven.as_ref()
    }

    pub fn quarkus_versions(&self) -> Option<&RegistryQuarkusVersionsConfig> {
        self.quarkus_versions.as_ref()
    }

    /// Free-form metadata that is not part of the registry schema.
    pub fn extra(&self) -> &ExtraMetadata {
        &self.extra
    }
}

/// Mutable staging form of [`RegistryConfig`].
///
/// Setters replace the whole field. The `maybe_*` variants accept an
/// `Option` so a field can also be cleared.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfigBuilder {
    id: String,
    enabled: Setting<bool>,
    update_policy: Option<String>,
    descriptor: Option<RegistryDescriptorConfig>,
    platforms: Option<RegistryPlatformsConfig>,
    non_platform_extensions: Option<RegistryNonPlatformExtensionsConfig>,
    maven: Option<RegistryMavenConfig>,
    quarkus_versions: Option<RegistryQuarkusVersionsConfig>,
    extra: ExtraMetadata,
}

impl RegistryConfigBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn enabled(mut self, enabled: impl Into<Setting<bool>>) -> Self {
        self.enabled = enabled.into();
        self
    }

    pub fn update_policy(mut self, policy: impl Into<String>) -> Self {
        self.update_policy = Some(policy.into());
        self
    }

    pub fn maybe_update_policy(mut self, policy: Option<String>) -> Self {
        self.update_policy = policy;
        self
    }

    pub fn descriptor(mut self, descriptor: RegistryDescriptorConfig) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    pub fn maybe_descriptor(mut self, descriptor: Option<RegistryDescriptorConfig>) -> Self {
        self.descriptor = descriptor;
        self
    }

    pub fn platforms(mut self, platforms: RegistryPlatformsConfig) -> Self {
        self.platforms = Some(platforms);
        self
    }

    pub fn maybe_platforms(mut self, platforms: Option<RegistryPlatformsConfig>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn non_platform_extensions(mut self, config: RegistryNonPlatformExtensionsConfig) -> Self {
        self.non_platform_extensions = Some(config);
        self
    }

    pub fn maybe_non_platform_extensions(
        mut self,
        config: Option<RegistryNonPlatformExtensionsConfig>,
    ) -> Self {
        self.non_platform_extensions = config;
        self
    }

    pub fn maven(mut self, maven: RegistryMavenConfig) -> Self {
        self.maven = Some(maven);
        self
    }

    pub fn maybe_maven(mut self, maven: Option<RegistryMavenConfig>) -> Self {
        self.maven = maven;
        self
    }

    pub fn quarkus_versions(mut self, versions: RegistryQuarkusVersionsConfig) -> Self {
        self.quarkus_versions = Some(versions);
        self
    }

    pub fn maybe_quarkus_versions(
        mut self,
        versions: Option<RegistryQuarkusVersionsConfig>,
    ) -> Self {
        self.quarkus_versions = versions;
        self
    }

    /// Replace all extra metadata. Entries named after a [`RESERVED_KEYS`]
    /// entry are skipped.
    pub fn extra(mut self, extra: ExtraMetadata) -> Self {
        self.extra = extra
            .into_iter()
            .filter(|(key, _)| accepts_extra_key(key))
            .collect();
        self
    }

    /// Add or replace a single extra metadata entry. A key from
    /// [`RESERVED_KEYS`] is skipped.
    pub fn extra_entry(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        let key = key.into();
        if accepts_extra_key(&key) {
            self.extra.insert(key, value);
        }
        self
    }

    /// Freeze the staged configuration.
    pub fn build(self) -> RegistryConfig {
        RegistryConfig {
            id: self.id,
            enabled: self.enabled,
            update_policy: self.update_policy,
            descriptor: self.descriptor,
            platforms: self.platforms,
            non_platform_extensions: self.non_platform_extensions,
            maven: self.maven,
            quarkus_versions: self.quarkus_versions,
            extra: self.extra,
        }
    }
}

fn accepts_extra_key(key: &str) -> bool {
    if RESERVED_KEYS.contains(&key) {
        warn!(key, "Skipping extra metadata entry named after a registry field");
        return false;
    }
    true
}
