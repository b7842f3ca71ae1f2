//! Quarkus versions a registry recognizes.

use crate::Setting;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(test)]
#[path = "quarkus_versions_tests.rs"]
mod tests;

/// Which Quarkus versions and platform group ids a registry provides.
///
/// Every field is independently optional. During completion each one falls
/// back to the remote value only when left unset here.
///
/// # Examples
///
/// ```rust
/// use registry_config::RegistryQuarkusVersionsConfig;
///
/// let versions = RegistryQuarkusVersionsConfig::builder()
///     .recognized_versions_expression("*acme*")
///     .exclusive_provider(true)
///     .build();
///
/// assert!(versions.recognizes("3.2.0.acme-00001"));
/// assert!(!versions.recognizes("3.2.0.Final"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryQuarkusVersionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recognized_versions_expression: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    recognized_group_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Setting::is_unset")]
    exclusive_provider: Setting<bool>,
}

impl RegistryQuarkusVersionsConfig {
    pub fn builder() -> RegistryQuarkusVersionsConfigBuilder {
        RegistryQuarkusVersionsConfigBuilder::default()
    }

    pub fn to_builder(&self) -> RegistryQuarkusVersionsConfigBuilder {
        RegistryQuarkusVersionsConfigBuilder {
            recognized_versions_expression: self.recognized_versions_expression.clone(),
            recognized_group_ids: self.recognized_group_ids.clone(),
            exclusive_provider: self.exclusive_provider,
        }
    }

    /// Glob expression matched against Quarkus versions, e.g. `*acme*`.
    pub fn recognized_versions_expression(&self) -> Option<&str> {
        self.recognized_versions_expression.as_deref()
    }

    /// Platform group ids this registry provides, in declaration order.
    pub fn recognized_group_ids(&self) -> Option<&[String]> {
        self.recognized_group_ids.as_deref()
    }

    /// Whether the registry is the only provider of the versions it recognizes.
    pub fn exclusive_provider(&self) -> Setting<bool> {
        self.exclusive_provider
    }

    /// Check a Quarkus version against the recognized-versions expression.
    ///
    /// `*` matches any run of characters, `?` exactly one; the whole version
    /// must match. Without an expression no version is recognized.
    pub fn recognizes(&self, version: &str) -> bool {
        let Some(expression) = self.recognized_versions_expression.as_deref() else {
            return false;
        };

        match glob_to_regex(expression) {
            Ok(regex) => regex.is_match(version),
            Err(e) => {
                warn!(expression, error = %e, "Unusable recognized versions expression");
                false
            }
        }
    }

    /// Check whether a platform group id is listed as recognized.
    pub fn recognizes_group_id(&self, group_id: &str) -> bool {
        self.recognized_group_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == group_id))
    }
}

fn glob_to_regex(expression: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::with_capacity(expression.len() + 2);
    pattern.push('^');
    for c in expression.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            other => pattern.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    Regex::new(&pattern)
}

/// Mutable staging form of [`RegistryQuarkusVersionsConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegistryQuarkusVersionsConfigBuilder {
    recognized_versions_expression: Option<String>,
    recognized_group_ids: Option<Vec<String>>,
    exclusive_provider: Setting<bool>,
}

impl RegistryQuarkusVersionsConfigBuilder {
    pub fn recognized_versions_expression(mut self, expression: impl Into<String>) -> Self {
        self.recognized_versions_expression = Some(expression.into());
        self
    }

    pub fn maybe_recognized_versions_expression(mut self, expression: Option<String>) -> Self {
        self.recognized_versions_expression = expression;
        self
    }

    pub fn recognized_group_ids<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recognized_group_ids = Some(group_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn maybe_recognized_group_ids(mut self, group_ids: Option<Vec<String>>) -> Self {
        self.recognized_group_ids = group_ids;
        self
    }

    pub fn exclusive_provider(mut self, exclusive: impl Into<Setting<bool>>) -> Self {
        self.exclusive_provider = exclusive.into();
        self
    }

    pub fn build(self) -> RegistryQuarkusVersionsConfig {
        RegistryQuarkusVersionsConfig {
            recognized_versions_expression: self.recognized_versions_expression,
            recognized_group_ids: self.recognized_group_ids,
            exclusive_provider: self.exclusive_provider,
        }
    }
}
