use crate::domain::{Credit, ValuedCategory};
use chrono::Utc;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_categories: usize,
    pub leaderboard_entries: usize,
    pub credit_rows: usize,
    pub credited_players: usize,
    pub last_updated: String,
    pub version: String,
}

impl RunSummary {
    pub fn new(categories: &[ValuedCategory<'_>], credits: &[Credit]) -> Self {
        let credited_players = credits
            .iter()
            .map(|credit| credit.player.as_str())
            .collect::<FxHashSet<_>>()
            .len();

        Self {
            total_categories: categories.len(),
            leaderboard_entries: categories.iter().map(|c| c.leaderboard.len()).sum(),
            credit_rows: credits.len(),
            credited_players,
            last_updated: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
