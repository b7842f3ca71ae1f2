//! Extension registry configuration for build tooling.
//!
//! A registry is declared by the user with as little as an id and a
//! descriptor location; the registry publishes the rest of its configuration
//! in a descriptor document. This crate holds the configuration value types
//! and completes a declared configuration with the fetched descriptor:
//!
//! ```rust
//! use registry_config::{
//!     complete, parse_declared_registries, parse_remote_descriptor, ConfigurationValidator,
//!     RegistryConfigValidator,
//! };
//!
//! let declared = parse_declared_registries(r#"
//!     [[registries]]
//!     id = "acme-registry"
//!     [registries.descriptor]
//!     artifact = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT"
//! "#)?;
//! let remote = parse_remote_descriptor(r#"{
//!     "id": "acme-registry",
//!     "platforms": { "artifact": "org.acme.registry:acme-platforms::json:1.0-SNAPSHOT" }
//! }"#)?;
//!
//! let completed = complete(&declared[0], &remote);
//! RegistryConfigValidator::new().ensure_complete(&completed)?;
//! assert!(completed.platforms().is_some());
//! # Ok::<(), registry_config::ConfigurationError>(())
//! ```
//!
//! Fetching descriptors and resolving artifacts is left to the caller.

pub mod artifact_coords;
pub mod errors;
pub mod loader;
pub mod merger;
pub mod registry;
pub mod registry_config;
pub mod registry_validator;
pub mod setting;
pub mod source_trace;
pub mod validator;


// Re-export for convenient access
pub use artifact_coords::ArtifactCoords;
pub use errors::{ConfigurationError, ConfigurationResult};
pub use loader::{
    find_declared_registry, load_declared_registries, load_remote_descriptor,
    parse_declared_registries, parse_remote_descriptor, RegistriesDocument,
};
pub use merger::{complete, RegistryConfigMerger};
pub use registry::{
    RegistryDescriptorConfig, RegistryMavenConfig, RegistryNonPlatformExtensionsConfig,
    RegistryPlatformsConfig, RegistryQuarkusVersionsConfig,
};
pub use registry_config::{ExtraMetadata, RegistryConfig, RegistryConfigBuilder, RESERVED_KEYS};
pub use registry_validator::RegistryConfigValidator;
pub use setting::Setting;
pub use source_trace::{CompletedRegistryConfig, ConfigurationSource, ConfigurationSourceTrace};
pub use validator::{
    ConfigurationValidator, ValidationError, ValidationErrorType, ValidationResult,
    ValidationWarning,
};
