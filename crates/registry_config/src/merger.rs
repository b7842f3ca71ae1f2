//! Registry configuration completion.
//!
//! Completes a user-declared registry configuration with the configuration
//! published in the registry's own descriptor. The declared side takes
//! precedence; the remote side only fills in what the user left unset.
//!
//! # Completion Rules
//!
//! | Field | Rule |
//! |---|---|
//! | `id` | declared if non-empty, else remote |
//! | `enabled`, `update-policy` | declared if set, else remote |
//! | `descriptor`, `non-platform-extensions`, `maven` | declared object wholesale if present, else remote |
//! | `platforms` | remote object as-is if none declared, otherwise per field |
//! | `quarkus-versions` | remote object as-is if none declared, otherwise per field |
//! | `extra` | always declared, remote ignored |
//!
//! Per-field merging takes each declared value that is set and falls back to
//! the remote value otherwise. Nothing is defaulted: a value unset on both
//! sides stays unset.
//!
//! # Examples
//!
//! ```rust
//! use registry_config::{complete, RegistryConfig, RegistryPlatformsConfig, Setting};
//!
//! let declared = RegistryConfig::builder()
//!     .id("acme-registry")
//!     .platforms(RegistryPlatformsConfig::default())
//!     .build();
//! let remote = RegistryConfig::builder()
//!     .id("acme-registry")
//!     .platforms(RegistryPlatformsConfig::builder().extension_catalogs_included(true).build())
//!     .build();
//!
//! let completed = complete(&declared, &remote);
//! assert_eq!(
//!     completed.platforms().map(|p| p.extension_catalogs_included()),
//!     Some(Setting::Value(true))
//! );
//! ```

use crate::{
    registry::{RegistryPlatformsConfig, RegistryQuarkusVersionsConfig},
    source_trace::{CompletedRegistryConfig, ConfigurationSource, ConfigurationSourceTrace},
    RegistryConfig, Setting,
};
use tracing::{debug, info};

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;

/// Completes registry configurations.
///
/// Stateless: every call reads its two inputs and allocates a new result, so
/// one merger can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfigMerger {}

impl RegistryConfigMerger {
    pub fn new() -> Self {
        Self {}
    }

    /// Completes `declared` with values from `remote`.
    ///
    /// Never fails; required-field checks belong to
    /// [`RegistryConfigValidator`](crate::RegistryConfigValidator) and run
    /// after completion.
    pub fn complete(&self, declared: &RegistryConfig, remote: &RegistryConfig) -> RegistryConfig {
        self.complete_traced(declared, remote).into_config()
    }

    /// Completes `declared` with values from `remote`, recording which side
    /// every populated field came from.
    pub fn complete_traced(
        &self,
        declared: &RegistryConfig,
        remote: &RegistryConfig,
    ) -> CompletedRegistryConfig {
        let mut trace = ConfigurationSourceTrace::new();

        let id = if !declared.id().is_empty() {
            trace.add_source("id", ConfigurationSource::Declared);
            declared.id().to_string()
        } else {
            if !remote.id().is_empty() {
                trace.add_source("id", ConfigurationSource::Remote);
            }
            remote.id().to_string()
        };

        let enabled = pick_setting(declared.enabled(), remote.enabled(), "enabled", &mut trace);
        let update_policy = pick(
            declared.update_policy(),
            remote.update_policy(),
            "update-policy",
            &mut trace,
        )
        .map(str::to_string);

        let descriptor = pick(
            declared.descriptor(),
            remote.descriptor(),
            "descriptor",
            &mut trace,
        )
        .cloned();

        let platforms = self.complete_platforms(declared.platforms(), remote.platforms(), &mut trace);

        let non_platform_extensions = pick(
            declared.non_platform_extensions(),
            remote.non_platform_extensions(),
            "non-platform-extensions",
            &mut trace,
        )
        .cloned();

        let maven = pick(declared.maven(), remote.maven(), "maven", &mut trace).cloned();

        let quarkus_versions = self.complete_quarkus_versions(
            declared.quarkus_versions(),
            remote.quarkus_versions(),
            &mut trace,
        );

        if !declared.extra().is_empty() {
            trace.add_source("extra", ConfigurationSource::Declared);
        }

        let config = RegistryConfig::builder()
            .id(id)
            .enabled(enabled)
            .maybe_update_policy(update_policy)
            .maybe_descriptor(descriptor)
            .maybe_platforms(platforms)
            .maybe_non_platform_extensions(non_platform_extensions)
            .maybe_maven(maven)
            .maybe_quarkus_versions(quarkus_versions)
            .extra(declared.extra().clone())
            .build();

        info!(
            registry = config.id(),
            fields = trace.field_count(),
            from_remote = trace.remote_fields().len(),
            "Completed registry configuration"
        );

        CompletedRegistryConfig {
            config,
            source_trace: trace,
        }
    }

    fn complete_platforms(
        &self,
        declared: Option<&RegistryPlatformsConfig>,
        remote: Option<&RegistryPlatformsConfig>,
        trace: &mut ConfigurationSourceTrace,
    ) -> Option<RegistryPlatformsConfig> {
        let (declared, remote) = match (declared, remote) {
            (None, None) => return None,
            (None, Some(remote)) => {
                trace_platforms(remote, ConfigurationSource::Remote, trace);
                return Some(remote.clone());
            }
            (Some(declared), None) => {
                trace_platforms(declared, ConfigurationSource::Declared, trace);
                return Some(declared.clone());
            }
            (Some(declared), Some(remote)) => (declared, remote),
        };

        trace.add_source("platforms", ConfigurationSource::Declared);
        let artifact = pick(
            declared.artifact(),
            remote.artifact(),
            "platforms.artifact",
            trace,
        )
        .cloned();
        let disabled = pick_setting(
            declared.disabled(),
            remote.disabled(),
            "platforms.disabled",
            trace,
        );
        let extension_catalogs_included = pick_setting(
            declared.extension_catalogs_included(),
            remote.extension_catalogs_included(),
            "platforms.extension-catalogs-included",
            trace,
        );

        Some(
            RegistryPlatformsConfig::builder()
                .maybe_artifact(artifact)
                .disabled(disabled)
                .extension_catalogs_included(extension_catalogs_included)
                .build(),
        )
    }

    fn complete_quarkus_versions(
        &self,
        declared: Option<&RegistryQuarkusVersionsConfig>,
        remote: Option<&RegistryQuarkusVersionsConfig>,
        trace: &mut ConfigurationSourceTrace,
    ) -> Option<RegistryQuarkusVersionsConfig> {
        let (declared, remote) = match (declared, remote) {
            (None, None) => return None,
            (None, Some(remote)) => {
                trace_quarkus_versions(remote, ConfigurationSource::Remote, trace);
                return Some(remote.clone());
            }
            (Some(declared), None) => {
                trace_quarkus_versions(declared, ConfigurationSource::Declared, trace);
                return Some(declared.clone());
            }
            (Some(declared), Some(remote)) => (declared, remote),
        };

        trace.add_source("quarkus-versions", ConfigurationSource::Declared);
        let expression = pick(
            declared.recognized_versions_expression(),
            remote.recognized_versions_expression(),
            "quarkus-versions.recognized-versions-expression",
            trace,
        )
        .map(str::to_string);
        // Wholesale: the remote list is never appended to a declared one.
        let group_ids = pick(
            declared.recognized_group_ids(),
            remote.recognized_group_ids(),
            "quarkus-versions.recognized-group-ids",
            trace,
        )
        .map(<[String]>::to_vec);
        let exclusive_provider = pick_setting(
            declared.exclusive_provider(),
            remote.exclusive_provider(),
            "quarkus-versions.exclusive-provider",
            trace,
        );

        Some(
            RegistryQuarkusVersionsConfig::builder()
                .maybe_recognized_versions_expression(expression)
                .maybe_recognized_group_ids(group_ids)
                .exclusive_provider(exclusive_provider)
                .build(),
        )
    }
}

/// Completes `declared` with values from `remote` using a default merger.
pub fn complete(declared: &RegistryConfig, remote: &RegistryConfig) -> RegistryConfig {
    RegistryConfigMerger::new().complete(declared, remote)
}

/// Takes the declared value if present, else the remote one.
fn pick<'a, T: ?Sized>(
    declared: Option<&'a T>,
    remote: Option<&'a T>,
    field_path: &str,
    trace: &mut ConfigurationSourceTrace,
) -> Option<&'a T> {
    match (declared, remote) {
        (Some(value), _) => {
            debug!(field = field_path, source = %ConfigurationSource::Declared, "Field completed");
            trace.add_source(field_path, ConfigurationSource::Declared);
            Some(value)
        }
        (None, Some(value)) => {
            debug!(field = field_path, source = %ConfigurationSource::Remote, "Field completed");
            trace.add_source(field_path, ConfigurationSource::Remote);
            Some(value)
        }
        (None, None) => None,
    }
}

fn pick_setting<T: Copy>(
    declared: Setting<T>,
    remote: Setting<T>,
    field_path: &str,
    trace: &mut ConfigurationSourceTrace,
) -> Setting<T> {
    pick(declared.get(), remote.get(), field_path, trace)
        .copied()
        .into()
}

fn trace_platforms(
    platforms: &RegistryPlatformsConfig,
    source: ConfigurationSource,
    trace: &mut ConfigurationSourceTrace,
) {
    trace.add_source("platforms", source);
    if platforms.artifact().is_some() {
        trace.add_source("platforms.artifact", source);
    }
    if platforms.disabled().is_set() {
        trace.add_source("platforms.disabled", source);
    }
    if platforms.extension_catalogs_included().is_set() {
        trace.add_source("platforms.extension-catalogs-included", source);
    }
}

fn trace_quarkus_versions(
    versions: &RegistryQuarkusVersionsConfig,
    source: ConfigurationSource,
    trace: &mut ConfigurationSourceTrace,
) {
    trace.add_source("quarkus-versions", source);
    if versions.recognized_versions_expression().is_some() {
        trace.add_source("quarkus-versions.recognized-versions-expression", source);
    }
    if versions.recognized_group_ids().is_some() {
        trace.add_source("quarkus-versions.recognized-group-ids", source);
    }
    if versions.exclusive_provider().is_set() {
        trace.add_source("quarkus-versions.exclusive-provider", source);
    }
}
