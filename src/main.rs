use clap::Parser;
use tracing_subscriber::EnvFilter;

use slt::cli_app::{handle_command, Cli};
use slt::config::Config;
use slt::SpacexApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let spacex_api = SpacexApi::new(&config.spacex_base_url)?;
    handle_command(cli, &spacex_api).await;
    Ok(())
}
