use crate::error::{Result, StatsError};
use serde::Deserialize;
use std::cmp::Ordering;

/// One submitted attempt, as supplied by the category export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    #[serde(default)]
    pub time: Option<f64>,
    /// Unix timestamp, possibly fractional; non-positive or missing means the date is unknown.
    #[serde(default)]
    pub date: Option<f64>,
    #[serde(default)]
    pub date_submitted: Option<f64>,
    #[serde(default)]
    pub is_reverse_time: bool,
    #[serde(default)]
    pub is_level_run: bool,
    #[serde(default)]
    pub player_names: Vec<Option<String>>,
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub platform_name: Option<String>,
}

impl Run {
    /// The date, if it is a real (positive) timestamp.
    pub fn known_date(&self) -> Option<f64> {
        self.date.filter(|&date| date > 0.0)
    }

    /// Orders runs by `(date, dateSubmitted)`, missing values first.
    pub fn cmp_chronological(&self, other: &Run) -> Ordering {
        cmp_timestamps(self.date, other.date)
            .then_with(|| cmp_timestamps(self.date_submitted, other.date_submitted))
    }
}

fn cmp_timestamps(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Which direction of `time` wins a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOrder {
    /// Smaller times are better.
    Ascending,
    /// Larger times are better ("survive longest").
    Descending,
}

impl TimeOrder {
    pub fn from_reverse_time(is_reverse_time: bool) -> Self {
        if is_reverse_time {
            TimeOrder::Descending
        } else {
            TimeOrder::Ascending
        }
    }

    /// Best-first ordering of two times. Missing times always sort last.
    pub fn cmp_times(self, a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => match self {
                TimeOrder::Ascending => a.total_cmp(&b),
                TimeOrder::Descending => b.total_cmp(&a),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Whether `candidate` strictly beats `record`.
    pub fn improves(self, candidate: f64, record: f64) -> bool {
        match self {
            TimeOrder::Ascending => candidate < record,
            TimeOrder::Descending => candidate > record,
        }
    }
}

/// A named group of runs that compete against each other.
///
/// Constructed through [`Category::new`], which guarantees at least one run
/// and a single time polarity across all of them.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    runs: Vec<Run>,
    order: TimeOrder,
}

impl Category {
    pub fn new(name: impl Into<String>, runs: Vec<Run>) -> Result<Self> {
        let name = name.into();

        let Some(first) = runs.first() else {
            return Err(StatsError::EmptyCategory(name));
        };

        let is_reverse_time = first.is_reverse_time;
        if runs.iter().any(|run| run.is_reverse_time != is_reverse_time) {
            return Err(StatsError::MixedPolarity(name));
        }

        Ok(Self {
            name,
            runs,
            order: TimeOrder::from_reverse_time(is_reverse_time),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn order(&self) -> TimeOrder {
        self.order
    }

    /// Runs sorted by `(date, dateSubmitted)`, stable with respect to input order.
    pub fn chronological(&self) -> Vec<&Run> {
        let mut runs: Vec<&Run> = self.runs.iter().collect();
        runs.sort_by(|a, b| a.cmp_chronological(b));
        runs
    }
}
