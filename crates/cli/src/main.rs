//! Shopkeep CLI - runs the scripted store walkthrough.
//!
//! # Usage
//!
//! ```bash
//! # Print the walkthrough narrative
//! shopkeep
//!
//! # Same, explicitly
//! shopkeep demo
//!
//! # Print the final store state as JSON
//! shopkeep demo --format json
//!
//! # Show debug events from the store model on stderr
//! RUST_LOG=shopkeep_core=debug shopkeep
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shopkeep_cli::{CliConfig, OutputFormat, commands};

#[derive(Parser)]
#[command(name = "shopkeep")]
#[command(author, version, about = "Shopkeep store demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the store walkthrough
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Demo {
            format: OutputFormat::default(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            CliConfig::default().init_tracing();
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    config.init_tracing();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or_default() {
        Commands::Demo { format } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            commands::demo::run(format, &mut out)?;
        }
    }
    Ok(())
}
