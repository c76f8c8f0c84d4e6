use anyhow::Result;
use clap::Parser;
use pocketpal_infrastructure::ConfigService;
use pocketpal_server::AppBootstrap;
use pocketpal_server::cli::{Cli, Commands, ConfigAction, config_service, resolve_config};
use pocketpal_server::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            let config = resolve_config(&args)?;
            // Held until exit so the file writer flushes.
            let _log_guard = init_tracing(&config.logging)?;

            AppBootstrap::new(&config).run().await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                let path = ConfigService::new().config_path()?;
                println!("{}", path.display());
            }
            ConfigAction::Show { config } => {
                let config = config_service(config).get_config()?;
                print!("{}", ConfigService::to_toml(&config)?);
            }
        },
    }

    Ok(())
}
