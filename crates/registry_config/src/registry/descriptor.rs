//! Registry descriptor location.

use crate::ArtifactCoords;
use serde::{Deserialize, Serialize};

/// Where the registry's own descriptor document lives.
///
/// # Examples
///
/// ```rust
/// use registry_config::{ArtifactCoords, RegistryDescriptorConfig};
///
/// let descriptor = RegistryDescriptorConfig::builder()
///     .artifact(ArtifactCoords::parse("org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT")?)
///     .build();
/// assert_eq!(descriptor.artifact().unwrap().artifact_type(), "json");
/// # Ok::<(), registry_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryDescriptorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    artifact: Option<ArtifactCoords>,
}

impl RegistryDescriptorConfig {
    /// Start staging a new descriptor configuration.
    pub fn builder() -> RegistryDescriptorConfigBuilder {
        RegistryDescriptorConfigBuilder::default()
    }

    /// Copy this configuration into a builder.
    pub fn to_builder(&self) -> RegistryDescriptorConfigBuilder {
        RegistryDescriptorConfigBuilder {
            artifact: self.artifact.clone(),
        }
    }

    /// Coordinates of the descriptor document.
    pub fn artifact(&self) -> Option<&ArtifactCoords> {
        self.artifact.as_ref()
    }
}

/// Mutable staging form of [`RegistryDescriptorConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegistryDescriptorConfigBuilder {
    artifact: Option<ArtifactCoords>,
}

impl RegistryDescriptorConfigBuilder {
    pub fn artifact(mut self, artifact: ArtifactCoords) -> Self {
        self.artifact = Some(artifact);
        self
    }

    pub fn build(self) -> RegistryDescriptorConfig {
        RegistryDescriptorConfig {
            artifact: self.artifact,
        }
    }
}
