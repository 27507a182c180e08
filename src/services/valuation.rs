use crate::domain::{Category, CategoryStats, ValuedCategory};
use crate::services::leaderboard::{build_leaderboard, count_wr_progressions};
use crate::services::placement::place_leaderboard;
use tracing::debug;

/// Runs the full valuation pass for one category.
pub fn value_category(category: &Category) -> ValuedCategory<'_> {
    let leaderboard = build_leaderboard(category);
    let num_wrs = count_wr_progressions(category);
    let stats = CategoryStats::new(&leaderboard, category.runs().len(), num_wrs);

    debug!(
        category = category.name(),
        leaderboard_runs = stats.leaderboard_runs,
        total_runs = stats.total_runs,
        num_wrs = stats.num_wrs,
        wr_value = stats.wr_value,
        "Valued category"
    );

    ValuedCategory {
        name: category.name(),
        leaderboard: place_leaderboard(&leaderboard, &stats),
        stats,
    }
}
