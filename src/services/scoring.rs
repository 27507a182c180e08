use crate::domain::{CategoryStats, Run};

/// Encoded times above this are folded back before computing the run length.
const TIME_MODULUS: f64 = 10_000_000.0;
const LEVEL_RUN_FACTOR: f64 = 0.75;
const SMALL_LEADERBOARD_SPREAD: f64 = 0.2;

/// Length of the middle (lower-middle for even sizes) leaderboard entry, in minutes.
///
/// A missing time counts as zero minutes.
pub fn run_length(leaderboard: &[&Run]) -> f64 {
    let middle = leaderboard.len().saturating_sub(1) / 2;
    leaderboard
        .get(middle)
        .and_then(|run| run.time)
        .map_or(0.0, |time| time.rem_euclid(TIME_MODULUS) / 60.0)
}

/// Saturating duration weight, bounded above by 1.1.
pub fn length_weight(run_length: f64) -> f64 {
    1.1 - 1.01_f64.powf(-(run_length + 200.0)) - 2.4_f64.powf(-(run_length + 1.2))
}

/// Scalar worth of a whole category.
///
/// `total_runs` must be at least one.
pub fn wr_value(
    leaderboard_runs: usize,
    total_runs: usize,
    num_wrs: u32,
    length_weight: f64,
) -> f64 {
    let total = total_runs as f64;
    let leaderboard = leaderboard_runs as f64;
    let wrs = f64::from(num_wrs);

    let activity = total.log(1.7) * wrs + 120.0 * (-100.0 / total).exp() + 0.04 * total;
    let turnover = 1.0 - (wrs + 1.0) / (total + leaderboard);

    activity * turnover * length_weight
}

/// How sharply payouts fall off by rank.
pub fn spread_factor(leaderboard_runs: usize) -> f64 {
    if leaderboard_runs > 2 {
        let size = leaderboard_runs as f64;
        size.log(10.0) / size + 0.001
    } else {
        SMALL_LEADERBOARD_SPREAD
    }
}

impl CategoryStats {
    pub fn new(leaderboard: &[&Run], total_runs: usize, num_wrs: u32) -> Self {
        let leaderboard_runs = leaderboard.len();
        let run_length = run_length(leaderboard);
        let length_weight = length_weight(run_length);

        Self {
            leaderboard_runs,
            total_runs,
            num_wrs,
            run_length,
            length_weight,
            wr_value: wr_value(leaderboard_runs, total_runs, num_wrs, length_weight),
            spread_factor: spread_factor(leaderboard_runs),
        }
    }

    /// Rank-decay payout for a sequential place, before tie averaging.
    pub fn raw_value(&self, nominal_place: u32, is_level_run: bool) -> f64 {
        let sf = self.spread_factor;
        let size = self.leaderboard_runs as f64;
        let place = f64::from(nominal_place);

        let top = sf * self.wr_value * (size + 1.0 - place);
        let bottom = place + (sf * size - 1.0);
        let value = top / bottom;

        if is_level_run {
            value * LEVEL_RUN_FACTOR
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::run::tests::run;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn length_weight_saturates_below_limit() {
        let short = length_weight(0.0);
        let medium = length_weight(30.0);
        let long = length_weight(10_000.0);

        assert!(short > 0.0);
        assert!(short < medium && medium < long);
        assert!(long < 1.1);
        assert!(close(short, 1.1 - 1.01_f64.powf(-200.0) - 2.4_f64.powf(-1.2)));
    }

    #[test]
    fn run_length_uses_lower_middle_entry() {
        let runs = [
            run(Some(60.0), 1, &["a"]),
            run(Some(120.0), 1, &["b"]),
            run(Some(180.0), 1, &["c"]),
            run(Some(240.0), 1, &["d"]),
        ];
        let leaderboard: Vec<&Run> = runs.iter().collect();

        assert!(close(run_length(&leaderboard), 2.0));
        assert!(close(run_length(&leaderboard[..3]), 2.0));
        assert!(close(run_length(&leaderboard[..1]), 1.0));
    }

    #[test]
    fn run_length_folds_huge_times() {
        let runs = [run(Some(10_000_060.0), 1, &["a"])];
        let leaderboard: Vec<&Run> = runs.iter().collect();
        assert!(close(run_length(&leaderboard), 1.0));

        let untimed = [run(None, 1, &["a"])];
        let leaderboard: Vec<&Run> = untimed.iter().collect();
        assert_eq!(run_length(&leaderboard), 0.0);
    }

    #[test]
    fn spread_factor_for_small_and_large_boards() {
        assert_eq!(spread_factor(1), 0.2);
        assert_eq!(spread_factor(2), 0.2);
        assert!(close(spread_factor(10), 0.1 + 0.001));
        assert!(close(spread_factor(100), 0.02 + 0.001));
    }

    #[test]
    fn single_run_without_records_is_finite() {
        let value = wr_value(1, 1, 0, length_weight(0.0));
        assert!(value.is_finite());
        assert!(value > 0.0);

        let expected = (120.0 * (-100.0_f64).exp() + 0.04) * 0.5 * length_weight(0.0);
        assert!(close(value, expected));
    }

    #[test]
    fn wr_value_matches_formula() {
        let lw = length_weight(5.0);
        let expected = (200.0_f64.ln() / 1.7_f64.ln() * 6.0
            + 120.0 * (-0.5_f64).exp()
            + 0.04 * 200.0)
            * (1.0 - 7.0 / 250.0)
            * lw;
        assert!(close(wr_value(50, 200, 6, lw), expected));
    }

    #[test]
    fn payout_strictly_decreases_by_place() {
        let runs: Vec<_> = (1..=25)
            .map(|i| run(Some(f64::from(i) * 60.0), 1, &["p"]))
            .collect();
        let leaderboard: Vec<&Run> = runs.iter().collect();
        let stats = CategoryStats::new(&leaderboard, 80, 5);

        let values: Vec<f64> = (1..=25).map(|place| stats.raw_value(place, false)).collect();
        assert!(values.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(values[24] > 0.0);
    }

    #[test]
    fn level_runs_are_devalued() {
        let runs = [run(Some(60.0), 1, &["a"]), run(Some(70.0), 1, &["b"])];
        let leaderboard: Vec<&Run> = runs.iter().collect();
        let stats = CategoryStats::new(&leaderboard, 2, 1);

        assert!(close(
            stats.raw_value(1, true),
            stats.raw_value(1, false) * 0.75
        ));
    }
}
