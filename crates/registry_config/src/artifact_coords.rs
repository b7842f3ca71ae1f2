//! Maven artifact coordinates.
//!
//! Provides a validated value type for the `groupId:artifactId[:classifier]:type:version`
//! coordinates that locate registry descriptors, platform catalogs and
//! non-platform extension catalogs.

use crate::{ConfigurationError, ConfigurationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "artifact_coords_tests.rs"]
mod tests;

/// Artifact type used when the type segment is empty.
pub const DEFAULT_TYPE: &str = "jar";

/// Immutable Maven artifact coordinates.
///
/// Accepted string forms:
/// - `groupId:artifactId:type:version`
/// - `groupId:artifactId:classifier:type:version` (classifier may be empty)
///
/// The canonical rendering always has five segments, so parsing the output of
/// `to_string()` yields equal coordinates.
///
/// # Examples
///
/// ```
/// use registry_config::ArtifactCoords;
///
/// let coords: ArtifactCoords = "org.acme.registry:acme-registry-descriptor::json:1.0-SNAPSHOT".parse()?;
/// assert_eq!(coords.group_id(), "org.acme.registry");
/// assert_eq!(coords.classifier(), "");
/// assert_eq!(coords.artifact_type(), "json");
///
/// assert!("org.acme:acme-lib:2.1".parse::<ArtifactCoords>().is_err());
/// # Ok::<(), registry_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactCoords {
    group_id: String,
    artifact_id: String,
    classifier: String,
    artifact_type: String,
    version: String,
}

impl ArtifactCoords {
    /// Create coordinates from their parts.
    ///
    /// An empty `artifact_type` is normalized to [`DEFAULT_TYPE`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ParseError` if `group_id`, `artifact_id`
    /// or `version` is empty, or if any part contains a `:`.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        classifier: impl Into<String>,
        artifact_type: impl Into<String>,
        version: impl Into<String>,
    ) -> ConfigurationResult<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let classifier = classifier.into();
        let mut artifact_type = artifact_type.into();
        let version = version.into();

        if artifact_type.is_empty() {
            artifact_type = DEFAULT_TYPE.to_string();
        }

        let coords = Self {
            group_id,
            artifact_id,
            classifier,
            artifact_type,
            version,
        };

        let rendered = coords.to_string();
        let parts = [
            ("groupId", &coords.group_id),
            ("artifactId", &coords.artifact_id),
            ("classifier", &coords.classifier),
            ("type", &coords.artifact_type),
            ("version", &coords.version),
        ];
        for (name, value) in parts {
            if value.contains(':') {
                return Err(parse_error(&rendered, format!("{} contains ':'", name)));
            }
        }
        for (name, value) in [
            ("groupId", &coords.group_id),
            ("artifactId", &coords.artifact_id),
            ("version", &coords.version),
        ] {
            if value.trim().is_empty() {
                return Err(parse_error(&rendered, format!("{} is empty", name)));
            }
        }

        Ok(coords)
    }

    /// Parse coordinates from their colon-delimited string form.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ParseError` if fewer than four or more
    /// than five segments are present, or if `groupId`, `artifactId` or
    /// `version` is empty.
    pub fn parse(input: &str) -> ConfigurationResult<Self> {
        let segments: Vec<&str> = input.split(':').collect();
        let coords = match segments.as_slice() {
            [group_id, artifact_id, artifact_type, version] => {
                Self::new(*group_id, *artifact_id, "", *artifact_type, *version)
            }
            [group_id, artifact_id, classifier, artifact_type, version] => Self::new(
                *group_id,
                *artifact_id,
                *classifier,
                *artifact_type,
                *version,
            ),
            _ => Err(parse_error(
                input,
                format!(
                    "expected groupId:artifactId[:classifier]:type:version, found {} segment(s)",
                    segments.len()
                ),
            )),
        };

        coords.map_err(|e| match e {
            ConfigurationError::ParseError { reason, .. } => parse_error(input, reason),
            other => other,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Classifier, empty when the artifact has none.
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns a copy of these coordinates with a different version.
    pub fn with_version(&self, version: impl Into<String>) -> ConfigurationResult<Self> {
        Self::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.classifier.clone(),
            self.artifact_type.clone(),
            version,
        )
    }
}

fn parse_error(input: &str, reason: String) -> ConfigurationError {
    ConfigurationError::ParseError {
        input: input.to_string(),
        reason,
    }
}

impl fmt::Display for ArtifactCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.classifier, self.artifact_type, self.version
        )
    }
}

impl FromStr for ArtifactCoords {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ArtifactCoords {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ArtifactCoords> for String {
    fn from(coords: ArtifactCoords) -> Self {
        coords.to_string()
    }
}
