//! `validate` command: checks every declared registry on its own.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use registry_config::{load_declared_registries, ConfigurationValidator, RegistryConfigValidator};
use tracing::{info, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "validate_cmd_tests.rs"]
mod tests;

/// Arguments for the validate command
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// TOML file with the declared registries
    #[arg(short, long)]
    pub declared: PathBuf,
}

/// Execute the validate command, returning the report to print.
///
/// Declared registries are usually completed from their descriptor before
/// use, so a failure here means the declaration alone is not usable offline.
#[instrument]
pub fn execute(args: &ValidateArgs) -> Result<String, Error> {
    let registries = load_declared_registries(&args.declared)?;
    let validator = RegistryConfigValidator::new();

    let mut report = String::new();
    let mut failed = 0;
    for registry in &registries {
        let result = validator.validate(registry);
        let status = if result.is_valid() { "ok" } else { "FAILED" };
        let _ = writeln!(report, "{}: {}", registry.id(), status);

        for error in &result.errors {
            let _ = writeln!(report, "  error: {error}");
            if let Some(suggestion) = &error.suggestion {
                let _ = writeln!(report, "    suggestion: {suggestion}");
            }
        }
        for warning in &result.warnings {
            let _ = writeln!(report, "  warning: {warning}");
        }

        if !result.is_valid() {
            failed += 1;
        }
    }

    info!(
        registries = registries.len(),
        failed = failed,
        "Validated declared registries"
    );

    if failed > 0 {
        // Failed reports go to stderr; stdout stays empty.
        eprint!("{report}");
        return Err(Error::ValidationFailed { count: failed });
    }
    Ok(report)
}
