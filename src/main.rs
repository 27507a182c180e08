use clap::Parser;
use speedstats::config::cli::Args;
use speedstats::config::Config;
use speedstats::error::Result;
use speedstats::infrastructure::FileSystemStore;
use speedstats::services::RunService;
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::from_args(args)?;
    config.ensure_directories()?;

    let store = Arc::new(FileSystemStore::new(
        &config.args.categories_file,
        &config.args.output_file,
        &config.args.summary_file,
    ));

    let service = RunService::new(config, store);
    let summary = service.process().await?;

    info!(
        "Valued {} categories, credited {} players",
        summary.total_categories, summary.credited_players
    );
    Ok(())
}
