use clap::{Args, Parser, Subcommand};

use crate::external_api::spacex_api::models::launch_filter::LaunchFilter;
use crate::external_api::{spacex_api::SpacexApi, ApiError};
use crate::{list_launches, show_launch_details, show_next_launch};

#[derive(Parser)]
#[command(
    name = "slt",
    version = "0.1.3",
    author = "Valentin Semenov <spbvalek@gmail.com>",
    about = "CLI client for the SpaceX REST API <https://github.com/r-spacex/SpaceX-API>. slt - SpacexLaunchTracker",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the next scheduled launch
    Next,
    /// List past launches
    Launches(LaunchesArgs),
    /// Show details for a single launch
    Launch(LaunchArgs),
}

#[derive(Args)]
pub struct LaunchesArgs {
    /// Filter by launch outcome
    #[arg(long, short, value_enum, default_value_t = LaunchFilter::All)]
    pub filter: LaunchFilter,
}

#[derive(Args)]
pub struct LaunchArgs {
    /// Launch id
    #[arg(long, short, required = true, value_parser = validate_non_empty_id)]
    pub id: String,
}

fn validate_non_empty_id(value: &str) -> Result<String, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::EmptyLaunchId);
    }
    Ok(value.to_string())
}

pub async fn handle_command(cli: Cli, spacex_api: &SpacexApi) {
    match &cli.command {
        Commands::Next => match show_next_launch(spacex_api).await {
            Ok(value) => println!("{}", value),
            Err(e) => eprintln!("Failed to fetch next launch: {}", e),
        },
        Commands::Launches(value) => match list_launches(value.filter, spacex_api).await {
            Ok(value) => println!("{}", value),
            Err(e) => eprintln!("Failed to list past launches: {}", e),
        },
        Commands::Launch(value) => match show_launch_details(&value.id, spacex_api).await {
            Ok(value) => println!("{}", value),
            Err(e) => eprintln!("Failed to fetch launch details: {}", e),
        },
    }
}
