//! Platform catalog settings of a registry.

use crate::{ArtifactCoords, Setting};
use serde::{Deserialize, Serialize};

/// Names the artifact listing a registry's platforms and whether extension
/// catalogs are bundled with it.
///
/// `extension_catalogs_included` is three-state: unset is not the same as
/// `false`, and only an unset value is filled in from the remote descriptor.
///
/// # Examples
///
/// ```rust
/// use registry_config::{ArtifactCoords, RegistryPlatformsConfig, Setting};
///
/// let platforms = RegistryPlatformsConfig::builder()
///     .artifact(ArtifactCoords::parse("org.acme.registry:acme-platforms::json:1.0-SNAPSHOT")?)
///     .build();
/// assert_eq!(platforms.extension_catalogs_included(), Setting::Unset);
/// # Ok::<(), registry_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryPlatformsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    artifact: Option<ArtifactCoords>,

    #[serde(default, skip_serializing_if = "Setting::is_unset")]
    disabled: Setting<bool>,

    #[serde(default, skip_serializing_if = "Setting::is_unset")]
    extension_catalogs_included: Setting<bool>,
}

impl RegistryPlatformsConfig {
    pub fn builder() -> RegistryPlatformsConfigBuilder {
        RegistryPlatformsConfigBuilder::default()
    }

    pub fn to_builder(&self) -> RegistryPlatformsConfigBuilder {
        RegistryPlatformsConfigBuilder {
            artifact: self.artifact.clone(),
            disabled: self.disabled,
            extension_catalogs_included: self.extension_catalogs_included,
        }
    }

    /// Coordinates of the platform catalog.
    pub fn artifact(&self) -> Option<&ArtifactCoords> {
        self.artifact.as_ref()
    }

    pub fn disabled(&self) -> Setting<bool> {
        self.disabled
    }

    /// Whether platform resolution is switched off. Unset means enabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    pub fn extension_catalogs_included(&self) -> Setting<bool> {
        self.extension_catalogs_included
    }
}

/// Mutable staging form of [`RegistryPlatformsConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegistryPlatformsConfigBuilder {
    artifact: Option<ArtifactCoords>,
    disabled: Setting<bool>,
    extension_catalogs_included: Setting<bool>,
}

impl RegistryPlatformsConfigBuilder {
    pub fn artifact(mut self, artifact: ArtifactCoords) -> Self {
        self.artifact = Some(artifact);
        self
    }

    /// Replace the artifact, including clearing it with `None`.
    pub fn maybe_artifact(mut self, artifact: Option<ArtifactCoords>) -> Self {
        self.artifact = artifact;
        self
    }

    pub fn disabled(mut self, disabled: impl Into<Setting<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    pub fn extension_catalogs_included(mut self, included: impl Into<Setting<bool>>) -> Self {
        self.extension_catalogs_included = included.into();
        self
    }

    pub fn build(self) -> RegistryPlatformsConfig {
        RegistryPlatformsConfig {
            artifact: self.artifact,
            disabled: self.disabled,
            extension_catalogs_included: self.extension_catalogs_included,
        }
    }
}
