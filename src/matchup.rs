use std::collections::HashMap;

use crate::dataset::GameRecord;

/// Head-to-head averages against one opponent. Computed over the player's
/// full participating history: the H2H sample is small already and must not
/// shrink further under recency filters.
#[derive(Debug, Clone, Copy)]
pub struct HeadToHead {
    pub games: usize,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub points_rebounds: f64,
}

pub fn head_to_head(player_log: &[GameRecord], opponent: &str) -> Option<HeadToHead> {
    let vs: Vec<&GameRecord> = player_log
        .iter()
        .filter(|g| g.opponent == opponent)
        .collect();
    if vs.is_empty() {
        return None;
    }
    let n = vs.len() as f64;
    Some(HeadToHead {
        games: vs.len(),
        points: vs.iter().map(|g| g.points).sum::<f64>() / n,
        rebounds: vs.iter().map(|g| g.rebounds).sum::<f64>() / n,
        assists: vs.iter().map(|g| g.assists).sum::<f64>() / n,
        points_rebounds: vs.iter().map(|g| g.points_rebounds).sum::<f64>() / n,
    })
}

/// Mean production one opponent concedes to a position.
#[derive(Debug, Clone)]
pub struct DefensiveGap {
    pub position: String,
    pub points: f64,
    pub rebounds: f64,
    pub threes_made: f64,
}

/// Top-3 positions by mean points scored against the opponent, over the
/// whole league game log (this is an aggregate scan, so DNP rows stay in).
pub fn defensive_gaps(all_games: &[GameRecord], opponent: &str) -> Vec<DefensiveGap> {
    let mut by_pos: HashMap<&str, (f64, f64, f64, usize)> = HashMap::new();
    for g in all_games.iter().filter(|g| g.opponent == opponent) {
        if g.position.is_empty() {
            continue;
        }
        let entry = by_pos.entry(g.position.as_str()).or_insert((0.0, 0.0, 0.0, 0));
        entry.0 += g.points;
        entry.1 += g.rebounds;
        entry.2 += g.threes_made;
        entry.3 += 1;
    }
    let mut gaps: Vec<DefensiveGap> = by_pos
        .into_iter()
        .map(|(pos, (pts, reb, threes, n))| DefensiveGap {
            position: pos.to_string(),
            points: pts / n as f64,
            rebounds: reb / n as f64,
            threes_made: threes / n as f64,
        })
        .collect();
    gaps.sort_by(|a, b| b.points.total_cmp(&a.points));
    gaps.truncate(3);
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::game;

    fn vs(player: &str, date: &str, opponent: &str, position: &str, pts: f64) -> GameRecord {
        let mut g = game(player, date, true, pts, 6.0, 4.0);
        g.opponent = opponent.to_string();
        g.position = position.to_string();
        g
    }

    #[test]
    fn h2h_averages_only_the_opponent_games() {
        let log = vec![
            vs("X", "2024-01-01", "Miami Heat", "SG", 20.0),
            vs("X", "2024-01-05", "Utah Jazz", "SG", 50.0),
            vs("X", "2024-01-09", "Miami Heat", "SG", 30.0),
        ];
        let h2h = head_to_head(&log, "Miami Heat").unwrap();
        assert_eq!(h2h.games, 2);
        assert_eq!(h2h.points, 25.0);
        assert_eq!(h2h.points_rebounds, 31.0);
    }

    #[test]
    fn h2h_without_history_is_none() {
        let log = vec![vs("X", "2024-01-01", "Miami Heat", "SG", 20.0)];
        assert!(head_to_head(&log, "Utah Jazz").is_none());
    }

    #[test]
    fn gaps_rank_positions_by_points_and_cap_at_three() {
        let games = vec![
            vs("A", "2024-01-01", "Miami Heat", "PG", 30.0),
            vs("B", "2024-01-01", "Miami Heat", "SG", 22.0),
            vs("C", "2024-01-01", "Miami Heat", "SF", 18.0),
            vs("D", "2024-01-01", "Miami Heat", "PF", 14.0),
            vs("E", "2024-01-01", "Miami Heat", "C", 10.0),
            vs("F", "2024-01-01", "Utah Jazz", "PG", 99.0),
        ];
        let gaps = defensive_gaps(&games, "Miami Heat");
        assert_eq!(gaps.len(), 3);
        assert_eq!(gaps[0].position, "PG");
        assert_eq!(gaps[0].points, 30.0);
        assert_eq!(gaps[2].position, "SF");
    }
}
