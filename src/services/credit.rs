use crate::domain::{Credit, ValuedCategory};
use rustc_hash::FxHashSet;

/// Prefix of participants that were not registered players.
pub const GUEST_MARKER: &str = "[Guest]";

/// Splits run values across participants, crediting each player once per category.
#[derive(Debug, Clone, Default)]
pub struct CreditAllocator {
    excluded_players: FxHashSet<String>,
}

impl CreditAllocator {
    pub fn new<I, S>(excluded_players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_players: excluded_players.into_iter().map(Into::into).collect(),
        }
    }

    fn is_creditable(&self, player: &str) -> bool {
        !player.starts_with(GUEST_MARKER) && !self.excluded_players.contains(player)
    }

    /// Walks the leaderboard best-first, so every player is credited for their
    /// best-ranked appearance only.
    pub fn allocate(&self, category: &ValuedCategory<'_>) -> Vec<Credit> {
        let series = category.series_name().map(str::to_string);
        let game = category.game_name().to_string();
        let mut credited: FxHashSet<&str> = FxHashSet::default();
        let mut credits = Vec::new();

        for entry in &category.leaderboard {
            let participants = entry.run.player_names.len();
            if participants == 0 {
                continue;
            }
            let value_per_player = entry.value / participants as f64;
            let date = Credit::date_from_timestamp(entry.run.date);

            for player in entry.run.player_names.iter().flatten() {
                if !self.is_creditable(player) || !credited.insert(player.as_str()) {
                    continue;
                }

                credits.push(Credit {
                    leaderboard: category.name.to_string(),
                    series: series.clone(),
                    game: game.clone(),
                    player: player.clone(),
                    platform: entry.run.platform_name.clone(),
                    place: entry.place,
                    value: value_per_player,
                    date,
                });
            }
        }

        credits
    }
}
