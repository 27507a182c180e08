use crate::config::cli::Args;
use crate::error::Result;
use serde::Deserialize;
use tracing::info;

pub mod cli;

/// Fewest categories a real export is expected to contain.
pub const DEFAULT_MINIMUM_CATEGORIES: usize = 600_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Players who asked not to be credited.
    #[serde(default)]
    pub excluded_players: Vec<String>,
    #[serde(default = "default_minimum_categories")]
    pub minimum_categories: usize,
}

fn default_minimum_categories() -> usize {
    DEFAULT_MINIMUM_CATEGORIES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            excluded_players: Vec::new(),
            minimum_categories: DEFAULT_MINIMUM_CATEGORIES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub args: Args,
    pub settings: Settings,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let settings = if args.config_file.exists() {
            serde_json::from_str(&std::fs::read_to_string(&args.config_file)?)?
        } else {
            info!(
                "No settings file at {:?}, using defaults",
                args.config_file
            );
            Settings::default()
        };

        Ok(Self { args, settings })
    }

    pub fn with_settings(args: Args, settings: Settings) -> Self {
        Self { args, settings }
    }

    pub fn ensure_directories(&self) -> Result<()> {
        for path in [&self.args.output_file, &self.args.summary_file] {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                if !dir.exists() {
                    std::fs::create_dir_all(dir)?;
                }
            }
        }

        info!("Output dirs exist");
        Ok(())
    }
}
