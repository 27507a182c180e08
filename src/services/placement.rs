use crate::domain::{CategoryStats, PlacedRun, Run};

/// Assigns competition places and payouts to a time-ordered leaderboard.
///
/// Consecutive runs with exactly equal times form a tie group: every member
/// shows the place of the group's first member, and all receive the mean of
/// the raw payouts of the sequential places the group occupies.
pub fn place_leaderboard<'a>(leaderboard: &[&'a Run], stats: &CategoryStats) -> Vec<PlacedRun<'a>> {
    let mut placed = Vec::with_capacity(leaderboard.len());
    let mut start = 0;

    while let Some(first) = leaderboard.get(start) {
        // A NaN time never equals itself; it still occupies its own place.
        let tie_len = leaderboard[start..]
            .iter()
            .take_while(|run| run.time == first.time)
            .count()
            .max(1);
        let group = &leaderboard[start..start + tie_len];
        let place = start as u32 + 1;

        let mut total_value = 0.0;
        for (offset, run) in group.iter().enumerate() {
            total_value += stats.raw_value(place + offset as u32, run.is_level_run);
        }
        let value = total_value / tie_len as f64;

        placed.extend(group.iter().enumerate().map(|(offset, &run)| PlacedRun {
            run,
            place,
            nominal_place: place + offset as u32,
            value,
        }));

        start += tie_len;
    }

    placed
}
