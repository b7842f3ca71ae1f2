//! Sub-configuration types of a registry configuration.
//!
//! Each type comes as a frozen, read-only value and a builder used to stage
//! it. `build()` is the only way from one to the other; `to_builder()` goes
//! back for callers that need a modified copy.

pub mod descriptor;
pub mod maven;
pub mod non_platform_extensions;
pub mod platforms;
pub mod quarkus_versions;

// Re-export all types for convenient access
pub use descriptor::{RegistryDescriptorConfig, RegistryDescriptorConfigBuilder};
pub use maven::{RegistryMavenConfig, RegistryMavenConfigBuilder, RegistryMavenRepoConfig};
pub use non_platform_extensions::{
    RegistryNonPlatformExtensionsConfig, RegistryNonPlatformExtensionsConfigBuilder,
};
pub use platforms::{RegistryPlatformsConfig, RegistryPlatformsConfigBuilder};
pub use quarkus_versions::{RegistryQuarkusVersionsConfig, RegistryQuarkusVersionsConfigBuilder};
