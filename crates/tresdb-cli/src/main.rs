mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tresdb")]
#[command(about = "Accredited tourism establishments per province")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List provinces in display order
    Provinces,

    /// Fetch and normalize one province, or all of them
    Fetch {
        /// Province id; omit to fetch every province
        #[arg(long)]
        province: Option<String>,

        /// Keep records whose name, location, type, or address contains this text
        #[arg(long)]
        query: Option<String>,

        /// Print the normalized result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize sheet exports from local files
    Normalize {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = tresdb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Provinces) => commands::run_provinces(&config),
        Some(Commands::Fetch {
            province,
            query,
            json,
        }) => commands::run_fetch(&config, province.as_deref(), query.as_deref(), json).await,
        Some(Commands::Normalize { files, query, json }) => {
            commands::run_normalize(&files, query.as_deref(), json).await
        }
        None => commands::run_provinces(&config),
    }
}
