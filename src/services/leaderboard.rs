use crate::domain::{Category, Run};
use rustc_hash::FxHashSet;

/// Builds the best-per-party leaderboard of a category.
///
/// Runs are ordered by `(date, dateSubmitted)` first so that, after the stable
/// sort by time, equal times keep their submission order. Each exact ordered
/// `playerNames` sequence keeps only its first (best) appearance.
pub fn build_leaderboard(category: &Category) -> Vec<&Run> {
    let order = category.order();
    let mut runs = category.chronological();
    runs.sort_by(|a, b| order.cmp_times(a.time, b.time));

    let mut seen_parties: FxHashSet<&[Option<String>]> = FxHashSet::default();

    runs.into_iter()
        .filter(|&run| seen_parties.insert(run.player_names.as_slice()))
        .collect()
}

/// Counts how many times the record improved over submission history.
///
/// Runs with an unknown date or a missing time are ignored.
pub fn count_wr_progressions(category: &Category) -> u32 {
    let order = category.order();
    let mut current_record: Option<f64> = None;
    let mut num_wrs = 0;

    for run in category.chronological() {
        if run.known_date().is_none() {
            continue;
        }
        let Some(time) = run.time else {
            continue;
        };

        if current_record.map_or(true, |record| order.improves(time, record)) {
            current_record = Some(time);
            num_wrs += 1;
        }
    }

    num_wrs
}
