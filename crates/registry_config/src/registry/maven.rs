//! Maven repository settings of a registry.

use serde::{Deserialize, Serialize};

/// Maven repository that hosts the registry artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryMavenRepoConfig {
    /// Repository identifier used for credentials lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Repository base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Maven settings of a registry.
///
/// Taken as a whole during completion: a declared maven section replaces the
/// remote one entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryMavenConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repository: Option<RegistryMavenRepoConfig>,
}

impl RegistryMavenConfig {
    pub fn builder() -> RegistryMavenConfigBuilder {
        RegistryMavenConfigBuilder::default()
    }

    pub fn to_builder(&self) -> RegistryMavenConfigBuilder {
        RegistryMavenConfigBuilder {
            repository: self.repository.clone(),
        }
    }

    pub fn repository(&self) -> Option<&RegistryMavenRepoConfig> {
        self.repository.as_ref()
    }
}

/// Mutable staging form of [`RegistryMavenConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegistryMavenConfigBuilder {
    repository: Option<RegistryMavenRepoConfig>,
}

impl RegistryMavenConfigBuilder {
    pub fn repository(mut self, repository: RegistryMavenRepoConfig) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> RegistryMavenConfig {
        RegistryMavenConfig {
            repository: self.repository,
        }
    }
}
