use chrono::{DateTime, NaiveDate};

/// Literal token the bulk loader reads as SQL `NULL`.
pub const NULL_TOKEN: &str = "\\N";

/// One player's share of one run, at most once per player per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub leaderboard: String,
    pub series: Option<String>,
    pub game: String,
    pub player: String,
    pub platform: Option<String>,
    pub place: u32,
    pub value: f64,
    pub date: Option<NaiveDate>,
}

impl Credit {
    /// Converts a run timestamp to a calendar date. Non-positive timestamps are unknown.
    ///
    /// Fractional seconds are floored, so the date is the day the second began.
    pub fn date_from_timestamp(timestamp: Option<f64>) -> Option<NaiveDate> {
        timestamp
            .filter(|&ts| ts > 0.0)
            .and_then(|ts| DateTime::from_timestamp(ts.floor() as i64, 0))
            .map(|dt| dt.date_naive())
    }

    pub fn formatted_value(&self) -> String {
        format!("{:.3}", self.value)
    }

    /// The eight output columns:
    /// `Leaderboard, Series, Game, Player, Platform, Place, Value, Date`.
    pub fn to_record(&self) -> [String; 8] {
        [
            escape(&self.leaderboard),
            self.series
                .as_deref()
                .map(|series| escape(series).replace(',', "."))
                .unwrap_or_else(|| NULL_TOKEN.to_string()),
            escape(&self.game),
            escape(&self.player),
            self.platform
                .as_deref()
                .map(escape)
                .unwrap_or_else(|| NULL_TOKEN.to_string()),
            self.place.to_string(),
            self.formatted_value(),
            self.date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| NULL_TOKEN.to_string()),
        ]
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
}
