mod favorites;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cafescout")]
#[command(about = "Search cafes by city and keep a persisted favorites list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search cafes in a city
    Search {
        /// City to search, e.g. "Paris"
        city: String,
        /// Toggle these result ids as favorites after a successful search
        #[arg(long = "toggle", value_name = "ID")]
        toggle: Vec<i64>,
    },
    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        command: favorites::FavoritesCommand,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = cafescout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { city, toggle } => search::run(&config, &city, &toggle).await,
        Commands::Favorites { command } => favorites::run(&config, command),
    }
}
