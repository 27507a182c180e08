use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::{Category, Credit, RawCategories, RunSummary, ValuedCategory};
use crate::error::{Result, StatsError};
use crate::infrastructure::RankingsDatabase;
use crate::services::credit::CreditAllocator;
use crate::services::valuation::value_category;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

pub struct RunService {
    config: Config,
    store: Arc<dyn Storage>,
    credits: CreditAllocator,
}

impl RunService {
    pub fn new(config: Config, store: Arc<dyn Storage + 'static>) -> Self {
        let credits = CreditAllocator::new(config.settings.excluded_players.iter().cloned());
        Self {
            config,
            store,
            credits,
        }
    }

    pub async fn process(&self) -> Result<RunSummary> {
        info!("Starting run valuation pipeline");

        let categories = self.load_categories()?;
        info!("Validated {} categories", categories.len());

        let valued = self.value_categories(&categories)?;
        let credits = self.allocate_credits(&valued);
        info!("Credit allocation completed: {} rows", credits.len());

        self.store.save_credits(&credits)?;
        let summary = RunSummary::new(&valued, &credits);
        self.store.save_summary(&summary)?;

        if self.config.args.test {
            info!("Test mode, skipping database export");
        } else {
            self.export_to_database(&credits).await?;
        }

        info!("Processing pipeline completed successfully");
        Ok(summary)
    }

    /// Loads the raw export, applies the volume sanity check and validates every category.
    fn load_categories(&self) -> Result<Vec<Category>> {
        let raw = self.store.load_categories()?;
        self.check_volume(&raw)?;

        raw.into_iter()
            .map(|(name, runs)| Category::new(name, runs))
            .collect()
    }

    fn check_volume(&self, raw: &RawCategories) -> Result<()> {
        let minimum = self.config.settings.minimum_categories;
        if !self.config.args.test && raw.len() < minimum {
            error!("There aren't enough categories!");
            return Err(StatsError::NotEnoughCategories {
                found: raw.len(),
                minimum,
            });
        }
        Ok(())
    }

    fn value_categories<'a>(&self, categories: &'a [Category]) -> Result<Vec<ValuedCategory<'a>>> {
        let pb = ProgressBar::new(categories.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| StatsError::Other(e.to_string()))?,
        );
        pb.set_message("Valuing categories");

        let valued = categories
            .par_iter()
            .map(|category| {
                let valued = value_category(category);
                pb.inc(1);
                valued
            })
            .collect();

        pb.finish_with_message("Done valuing categories!");
        Ok(valued)
    }

    fn allocate_credits(&self, valued: &[ValuedCategory<'_>]) -> Vec<Credit> {
        valued
            .par_iter()
            .map(|category| self.credits.allocate(category))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    async fn export_to_database(&self, credits: &[Credit]) -> Result<()> {
        let url = self
            .config
            .args
            .database_url
            .as_deref()
            .ok_or(StatsError::MissingDatabaseUrl)?;

        let database = RankingsDatabase::connect(url).await.inspect_err(|e| {
            error!("Error connecting to the rankings database: {}", e);
        })?;

        database.export(credits).await.inspect_err(|e| {
            error!("Error loading results into the rankings database: {}", e);
        })
    }
}
