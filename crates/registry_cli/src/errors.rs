use registry_config::ConfigurationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the registry configuration CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Loading, parsing or validating a registry configuration failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// Invalid or incompatible command-line arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The completed configuration could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    /// One or more registries failed validation.
    #[error("{count} registry configuration(s) failed validation")]
    ValidationFailed { count: usize },
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ValidationFailed { .. } => 2,
            Error::Config(ConfigurationError::IncompleteConfig { .. }) => 2,
            _ => 1,
        }
    }
}
