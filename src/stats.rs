use crate::dataset::GameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    Minutes,
    Points,
    Rebounds,
    PointsRebounds,
    Assists,
    ThreesMade,
}

impl StatKey {
    /// Columns of the quick-insights table, in display order.
    pub const INSIGHT: [StatKey; 6] = [
        StatKey::Minutes,
        StatKey::Points,
        StatKey::Rebounds,
        StatKey::PointsRebounds,
        StatKey::Assists,
        StatKey::ThreesMade,
    ];

    /// Categories that carry betting lines and confidence ratios.
    pub const BETTABLE: [StatKey; 4] = [
        StatKey::Points,
        StatKey::Rebounds,
        StatKey::PointsRebounds,
        StatKey::Assists,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKey::Minutes => "MIN",
            StatKey::Points => "PTS",
            StatKey::Rebounds => "REB",
            StatKey::PointsRebounds => "P+R",
            StatKey::Assists => "AST",
            StatKey::ThreesMade => "3PTS",
        }
    }

    pub fn value(self, g: &GameRecord) -> f64 {
        match self {
            StatKey::Minutes => g.minutes,
            StatKey::Points => g.points,
            StatKey::Rebounds => g.rebounds,
            StatKey::PointsRebounds => g.points_rebounds,
            StatKey::Assists => g.assists,
            StatKey::ThreesMade => g.threes_made,
        }
    }
}

/// Descriptive aggregates for one stat over one game set. Empty input is all
/// zeros so downstream ratio math never sees NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatSummary {
    pub median: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Conventional median: middle element, or the mean of the two middles.
/// Empty input is 0.0.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

pub fn summarize_stat(games: &[GameRecord], stat: StatKey) -> StatSummary {
    if games.is_empty() {
        return StatSummary::default();
    }
    let values: Vec<f64> = games.iter().map(|g| stat.value(g)).collect();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for v in &values {
        min = min.min(*v);
        max = max.max(*v);
        sum += v;
    }
    StatSummary {
        median: median(&values),
        mean: sum / values.len() as f64,
        min,
        max,
    }
}

pub fn summarize(games: &[GameRecord], stats: &[StatKey]) -> Vec<(StatKey, StatSummary)> {
    stats
        .iter()
        .map(|stat| (*stat, summarize_stat(games, *stat)))
        .collect()
}

/// Share of games strictly above the threshold, in percent. Ties are not
/// hits. Empty input is `None` ("unavailable"), which is distinct from 0%.
pub fn hit_rate(games: &[GameRecord], stat: StatKey, threshold: f64) -> Option<f64> {
    if games.is_empty() {
        return None;
    }
    let hits = games.iter().filter(|g| stat.value(g) > threshold).count();
    Some(hits as f64 / games.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::game;

    #[test]
    fn median_handles_odd_and_even_counts() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn empty_input_summarizes_to_all_zeros() {
        let s = summarize_stat(&[], StatKey::Points);
        assert_eq!(s, StatSummary::default());
        assert!(!s.median.is_nan() && !s.mean.is_nan());
    }

    #[test]
    fn summary_covers_median_mean_min_max() {
        let games = vec![
            game("X", "2024-01-01", true, 10.0, 4.0, 1.0),
            game("X", "2024-01-02", true, 20.0, 6.0, 2.0),
            game("X", "2024-01-03", true, 30.0, 8.0, 3.0),
        ];
        let s = summarize_stat(&games, StatKey::Points);
        assert_eq!(s.median, 20.0);
        assert_eq!(s.mean, 20.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 30.0);
        let pr = summarize_stat(&games, StatKey::PointsRebounds);
        assert_eq!(pr.max, 38.0);
    }

    #[test]
    fn hit_rate_is_strictly_greater_than() {
        let games = vec![
            game("X", "2024-01-01", true, 20.0, 0.0, 1.0),
            game("X", "2024-01-02", true, 20.0, 0.0, 1.0),
            game("X", "2024-01-03", true, 25.0, 0.0, 1.0),
        ];
        let rate = hit_rate(&games, StatKey::Points, 20.0).unwrap();
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn hit_rate_on_empty_set_is_unavailable() {
        assert_eq!(hit_rate(&[], StatKey::Points, 10.0), None);
    }
}
