use clap::{Parser, Subcommand};

use registry_cli::commands::{
    complete_cmd::{self, CompleteArgs},
    coords_cmd,
    validate_cmd::{self, ValidateArgs},
};
use registry_cli::errors::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// registry-config: complete and check extension registry configurations
#[derive(Parser)]
#[command(name = "registry-config")]
#[command(about = "Complete and validate extension registry configurations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete a declared registry with the descriptor fetched from it
    Complete(CompleteArgs),

    /// Validate the declared registries as they are
    Validate(ValidateArgs),

    /// Print artifact coordinates in canonical form
    ParseCoords {
        /// groupId:artifactId[:classifier]:type:version
        coords: String,
    },

    /// Show the CLI version
    Version,
}

fn run(command: &Commands) -> Result<String, Error> {
    match command {
        Commands::Complete(args) => complete_cmd::execute(args),
        Commands::Validate(args) => validate_cmd::execute(args),
        Commands::ParseCoords { coords } => coords_cmd::execute(coords),
        Commands::Version => Ok(format!(
            "registry-config version {}",
            option_env!("REGISTRY_CONFIG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
        )),
    }
}

fn main() {
    // Logs go to stderr so stdout carries only command output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("REGISTRY_CONFIG_LOG"))
        .init();

    let cli = Cli::parse();
    match run(&cli.command) {
        Ok(output) => {
            println!("{}", output.trim_end());
        }
        Err(e) => {
            error!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
