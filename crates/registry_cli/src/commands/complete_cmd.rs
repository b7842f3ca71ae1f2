//! `complete` command: completes a declared registry with its descriptor.

use std::path::PathBuf;

use clap::Args;
use registry_config::{
    load_declared_registries, load_remote_descriptor, ConfigurationError, ConfigurationValidator,
    RegistryConfig, RegistryConfigMerger, RegistryConfigValidator,
};
use tracing::{debug, info, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "complete_cmd_tests.rs"]
mod tests;

/// Arguments for the complete command
#[derive(Args, Debug, Clone)]
pub struct CompleteArgs {
    /// TOML file with the declared registries
    #[arg(short, long)]
    pub declared: PathBuf,

    /// JSON registry descriptor fetched from the registry
    #[arg(short, long)]
    pub remote: PathBuf,

    /// Id of the declared registry to complete (defaults to the descriptor id)
    #[arg(long)]
    pub registry: Option<String>,

    /// Fail if the completed configuration is incomplete
    #[arg(long)]
    pub validate: bool,

    /// Print which side every field came from instead of the configuration
    #[arg(long)]
    pub trace: bool,
}

/// Execute the complete command, returning the text to print.
#[instrument]
pub fn execute(args: &CompleteArgs) -> Result<String, Error> {
    let declared_registries = load_declared_registries(&args.declared)?;
    let remote = load_remote_descriptor(&args.remote)?;

    let declared = select_registry(declared_registries, args.registry.as_deref(), &remote)?;
    debug!(registry = declared.id(), "Selected declared registry");

    let completed = RegistryConfigMerger::new().complete_traced(&declared, &remote);

    // The validator logs its own warnings.
    if args.validate {
        RegistryConfigValidator::new().ensure_complete(&completed.config)?;
    }

    info!(
        registry = completed.config.id(),
        from_remote = ?completed.source_trace.remote_fields(),
        "Registry configuration completed"
    );

    let output = if args.trace {
        serde_json::to_string_pretty(&completed.source_trace)?
    } else {
        serde_json::to_string_pretty(&completed.config)?
    };
    Ok(output)
}

/// Pick the declared registry to complete.
///
/// An explicit id wins. Without one, a file with a single registry needs no
/// id; otherwise the descriptor's id selects the registry.
fn select_registry(
    mut registries: Vec<RegistryConfig>,
    requested: Option<&str>,
    remote: &RegistryConfig,
) -> Result<RegistryConfig, Error> {
    let wanted = match requested {
        Some(id) => id,
        None if registries.len() == 1 => return Ok(registries.remove(0)),
        None if !remote.id().is_empty() => remote.id(),
        None => {
            return Err(Error::InvalidArguments(format!(
                "{} registries are declared; pick one with --registry",
                registries.len()
            )))
        }
    };

    match registries.iter().position(|r| r.id() == wanted) {
        Some(index) => Ok(registries.swap_remove(index)),
        None => Err(ConfigurationError::RegistryNotFound {
            id: wanted.to_string(),
        }
        .into()),
    }
}
