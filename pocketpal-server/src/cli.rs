//! Command-line interface.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pocketpal_core::config::RootConfig;
use pocketpal_infrastructure::ConfigService;

#[derive(Debug, Parser)]
#[command(name = "pocketpal")]
#[command(about = "PocketPal - user profile registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the default config file path
    Path,
    /// Print the effective configuration as TOML
    Show {
        /// Config file to read instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Config file to read instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Address to bind, overriding the config file (e.g. 0.0.0.0:8080)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Log filter, overriding the config file (e.g. debug)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Returns the config service for an optional explicit path.
pub fn config_service(path: Option<PathBuf>) -> ConfigService {
    match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    }
}

/// Loads the config file and applies command-line overrides on top.
pub fn resolve_config(args: &ServeArgs) -> Result<RootConfig> {
    let service = config_service(args.config.clone());
    let mut config = service
        .get_config()
        .context("Failed to load configuration")?;

    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}
