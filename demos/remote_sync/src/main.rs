//! `remote-sync` entry point: install logging, load settings, print a summary.
//!
//! Any settings failure is logged and returned from `main`, which exits with
//! a non-zero status.

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use remote_sync::cli::Cli;
use remote_sync::error::Result;
use remote_sync::settings::{RemoteSettings, print_summary};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    run(&Cli::parse()).map_err(color_eyre::eyre::Report::from)
}

fn run(cli: &Cli) -> Result<()> {
    let settings = RemoteSettings::load(&cli.config_paths())?;
    tracing::info!(host = %settings.remote.host, "configuration loaded");
    print_summary(&settings)?;
    Ok(())
}
