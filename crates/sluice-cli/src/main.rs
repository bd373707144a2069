use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sluice_cli::commands::{badge, collect, goals, server, watch};
use sluice_cli::{Cli, Commands, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Some(Commands::Badge { player }) => badge::run(&config, *player).await?,
        Some(Commands::Server) => server::run(&config).await?,
        Some(Commands::Goals) => goals::run(&config).await?,
        Some(Commands::Watch) => watch::run(&config).await?,
        Some(Commands::Collect { mapping, items }) => {
            collect::run(&config, mapping, items).await?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
