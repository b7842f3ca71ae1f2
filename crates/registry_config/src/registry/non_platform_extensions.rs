//! Catalog of extensions that are not part of any platform.

use crate::{ArtifactCoords, Setting};
use serde::{Deserialize, Serialize};

/// Location of the registry's non-platform extension catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryNonPlatformExtensionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    artifact: Option<ArtifactCoords>,

    #[serde(default, skip_serializing_if = "Setting::is_unset")]
    disabled: Setting<bool>,
}

impl RegistryNonPlatformExtensionsConfig {
    pub fn builder() -> RegistryNonPlatformExtensionsConfigBuilder {
        RegistryNonPlatformExtensionsConfigBuilder::default()
    }

    pub fn to_builder(&self) -> RegistryNonPlatformExtensionsConfigBuilder {
        RegistryNonPlatformExtensionsConfigBuilder {
            artifact: self.artifact.clone(),
            disabled: self.disabled,
        }
    }

    pub fn artifact(&self) -> Option<&ArtifactCoords> {
        self.artifact.as_ref()
    }

    pub fn disabled(&self) -> Setting<bool> {
        self.disabled
    }

    /// Whether the catalog is switched off. Unset means enabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

/// Mutable staging form of [`RegistryNonPlatformExtensionsConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegistryNonPlatformExtensionsConfigBuilder {
    artifact: Option<ArtifactCoords>,
    disabled: Setting<bool>,
}

impl RegistryNonPlatformExtensionsConfigBuilder {
    pub fn artifact(mut self, artifact: ArtifactCoords) -> Self {
        self.artifact = Some(artifact);
        self
    }

    pub fn disabled(mut self, disabled: impl Into<Setting<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    pub fn build(self) -> RegistryNonPlatformExtensionsConfig {
        RegistryNonPlatformExtensionsConfig {
            artifact: self.artifact,
            disabled: self.disabled,
        }
    }
}
