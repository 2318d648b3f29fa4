mod cancellations;
mod generate;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "prt")]
#[command(about = "parkrunner tourist site generation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate event pages and the sitemap from the events feed
    Generate,
    /// Refresh the weekly cancellations data file from the wiki
    Cancellations,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = prt_core::load_app_config()?;
    match cli.command {
        Commands::Generate => generate::run_generate(&config).await,
        Commands::Cancellations => cancellations::run_cancellations(&config).await,
    }
}
