use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the exported categories (JSON object of category name to runs)
    #[arg(long, default_value = "groups.json")]
    pub categories_file: PathBuf,

    /// Path of the delimited file with one row per player credit
    #[arg(long, default_value = "runs.csv")]
    pub output_file: PathBuf,

    /// Path to the settings file (excluded players, sanity thresholds)
    #[arg(long, default_value = "speedstats.json")]
    pub config_file: PathBuf,

    /// Path of the JSON summary written after each run
    #[arg(long, default_value = "summary.json")]
    pub summary_file: PathBuf,

    /// Production-test mode: skip the input volume check and the database load
    #[arg(long)]
    pub test: bool,

    /// MariaDB/MySQL connection URL for loading the results
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
