//! `parse-coords` command: prints artifact coordinates in canonical form.

use registry_config::ArtifactCoords;
use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "coords_cmd_tests.rs"]
mod tests;

/// Parse `coords` and render it as `groupId:artifactId:classifier:type:version`.
pub fn execute(coords: &str) -> Result<String, Error> {
    let parsed = ArtifactCoords::parse(coords)?;
    debug!(
        group_id = parsed.group_id(),
        artifact_id = parsed.artifact_id(),
        version = parsed.version(),
        "Parsed artifact coordinates"
    );
    Ok(parsed.to_string())
}
