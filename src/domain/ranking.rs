use super::Run;

/// A leaderboard entry after placement and payout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun<'a> {
    pub run: &'a Run,
    /// Shared competition rank; tied runs carry the place of their group's first member.
    pub place: u32,
    /// Sequential rank used by the payout curve.
    pub nominal_place: u32,
    pub value: f64,
}

/// Per-category scalars derived from the run list and its leaderboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStats {
    pub leaderboard_runs: usize,
    pub total_runs: usize,
    pub num_wrs: u32,
    /// Middle leaderboard time in minutes.
    pub run_length: f64,
    pub length_weight: f64,
    pub wr_value: f64,
    pub spread_factor: f64,
}

/// A fully valued category, ready for credit allocation.
#[derive(Debug, Clone)]
pub struct ValuedCategory<'a> {
    pub name: &'a str,
    pub stats: CategoryStats,
    pub leaderboard: Vec<PlacedRun<'a>>,
}

impl ValuedCategory<'_> {
    pub fn series_name(&self) -> Option<&str> {
        self.leaderboard
            .first()
            .and_then(|entry| entry.run.series_name.as_deref())
    }

    pub fn game_name(&self) -> &str {
        self.leaderboard
            .first()
            .map(|entry| entry.run.game_name.as_str())
            .unwrap_or_default()
    }
}
