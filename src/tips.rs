use tracing::debug;

use crate::consistency::floor_confidence;
use crate::dataset::{BettingLine, GameRecord};
use crate::lines::{games_for_line, line_value};
use crate::query::{self, Location, Window};
use crate::stats::{self, StatKey};

/// A recommendation needs the worst window game to clear three quarters of
/// the line. Exactly 75.0 is not enough.
pub const CONFIDENCE_CUTOFF: f64 = 75.0;

#[derive(Debug, Clone)]
pub struct TipRow {
    pub player: String,
    pub team: String,
    pub market: StatKey,
    pub line: f64,
    pub floor: f64,
    pub confidence: f64,
}

const TIP_MARKETS: [StatKey; 3] = [StatKey::Points, StatKey::Rebounds, StatKey::PointsRebounds];

/// Scan every betting line for high-confidence overs: resolve the line's
/// games (name match, the line's own home/away qualifier, then the query
/// window) and keep markets whose floor confidence strictly clears the
/// cutoff. A line with no matching games yields nothing.
pub fn recommend(games: &[GameRecord], lines: &[BettingLine], window: Window) -> Vec<TipRow> {
    let mut tips = Vec::new();
    for line in lines {
        let matched = games_for_line(games, line);
        let location = line.location.unwrap_or(Location::All);
        let filtered = query::filter_games(&matched, location, window);
        if filtered.is_empty() {
            continue;
        }
        for market in TIP_MARKETS {
            let Some(value) = line_value(line, market) else {
                continue;
            };
            let floor = stats::summarize_stat(&filtered, market).min;
            let confidence = floor_confidence(floor, value);
            if confidence > CONFIDENCE_CUTOFF {
                tips.push(TipRow {
                    player: filtered[0].player.clone(),
                    team: line.team.clone(),
                    market,
                    line: value,
                    floor,
                    confidence,
                });
            }
        }
    }
    tips.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    debug!(lines = lines.len(), tips = tips.len(), "tip scan");
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::game;

    fn line(player: &str, pts: Option<f64>, reb: Option<f64>) -> BettingLine {
        BettingLine {
            player: player.to_string(),
            team: "Boston Celtics".to_string(),
            location: None,
            points: pts,
            rebounds: reb,
            points_rebounds: None,
            assists: None,
            threes_made: None,
            detail: String::new(),
        }
    }

    #[test]
    fn confidence_of_exactly_75_is_excluded() {
        // Floor 15 vs line 20 -> exactly 75.0.
        let games = vec![
            game("X", "2024-01-01", true, 15.0, 5.0, 2.0),
            game("X", "2024-01-03", true, 25.0, 5.0, 2.0),
        ];
        let tips = recommend(&games, &[line("X", Some(20.0), None)], Window::All);
        assert!(tips.is_empty());

        // Floor 16 vs line 20 -> 80.0, strictly above the cutoff.
        let games = vec![
            game("X", "2024-01-01", true, 16.0, 5.0, 2.0),
            game("X", "2024-01-03", true, 25.0, 5.0, 2.0),
        ];
        let tips = recommend(&games, &[line("X", Some(20.0), None)], Window::All);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].market, StatKey::Points);
        assert_eq!(tips[0].floor, 16.0);
        assert_eq!(tips[0].confidence, 80.0);
    }

    #[test]
    fn unmatched_lines_produce_nothing() {
        let games = vec![game("X", "2024-01-01", true, 30.0, 10.0, 2.0)];
        let tips = recommend(&games, &[line("Nobody Here", Some(5.0), None)], Window::All);
        assert!(tips.is_empty());
    }

    #[test]
    fn tips_sorted_by_confidence_descending() {
        let games = vec![
            game("X", "2024-01-01", true, 18.0, 9.0, 2.0),
            game("X", "2024-01-03", true, 22.0, 10.0, 2.0),
        ];
        // Points: floor 18 / 20 = 90. Rebounds: floor 9 / 11.5 ≈ 78.3.
        let tips = recommend(&games, &[line("X", Some(20.0), Some(11.5))], Window::All);
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].market, StatKey::Points);
        assert!(tips[0].confidence > tips[1].confidence);
    }

    #[test]
    fn line_location_qualifier_restricts_the_sample() {
        let games = vec![
            game("X", "2024-01-01", true, 30.0, 5.0, 2.0),
            game("X", "2024-01-03", false, 5.0, 5.0, 2.0),
        ];
        let mut home_line = line("X", Some(25.0), None);
        home_line.location = Some(Location::Home);
        // Home-only sample has floor 30 vs line 25 -> 120%.
        let tips = recommend(&games, &[home_line.clone()], Window::All);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].floor, 30.0);

        // Without the qualifier the away clunker drags the floor to 5.
        home_line.location = None;
        assert!(recommend(&games, &[home_line], Window::All).is_empty());
    }
}
