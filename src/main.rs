use std::io;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

use superset_config::cli::{self, Cli};
use superset_config::SupersetConfig;

fn main() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr so stdout only carries rendered values
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("superset_config=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = SupersetConfig::from_env();

    let stdout = io::stdout();
    cli::run(&cli.command, &config, &mut stdout.lock())?;

    Ok(())
}
