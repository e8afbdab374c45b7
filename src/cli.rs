//! Command-line surface of the `superset-config` binary.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::SupersetConfig;
use crate::error::ConfigError;
use crate::export::{self, ExportFormat};

#[derive(Debug, Parser)]
#[command(name = "superset-config")]
#[command(version, about = "Superset configuration overlay", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the metadata database URI
    Uri {
        /// Mask the password
        #[arg(long)]
        redact: bool,
    },
    /// Render the exported values
    /// Examples:
    ///     superset-config render --format python --output pythonpath/superset_config.py
    ///     superset-config render --format json
    #[command(verbatim_doc_comment)]
    Render {
        /// python, json or env
        #[arg(short, long, default_value = "python")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a summary with secrets masked
    Show,
}

/// Runs `command` against `config`, writing user-facing output to `out`.
pub fn run<W: Write>(
    command: &Commands,
    config: &SupersetConfig,
    out: &mut W,
) -> Result<(), ConfigError> {
    match command {
        Commands::Uri { redact } => {
            if *redact {
                writeln!(out, "{}", config.database.redacted_uri())?;
            } else {
                writeln!(out, "{}", config.sqlalchemy_database_uri)?;
            }
        }
        Commands::Render { format, output } => match output {
            Some(path) => export::write_to(config, *format, path)?,
            None => write!(out, "{}", export::render(config, *format)?)?,
        },
        Commands::Show => {
            info!("Showing resolved configuration");
            writeln!(out, "database_uri: {}", config.database.redacted_uri())?;
            writeln!(out, "database_host: {}", config.database.host)?;
            writeln!(out, "database_name: {}", config.database.name)?;
            writeln!(
                out,
                "secret_key: {}",
                if config.secret_key.is_some() { "set" } else { "not set" }
            )?;
        }
    }
    Ok(())
}
