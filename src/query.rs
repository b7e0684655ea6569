use std::collections::HashMap;

use crate::dataset::GameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    All,
    Home,
    Away,
}

impl Location {
    pub fn admits(self, record: &GameRecord) -> bool {
        match self {
            Location::All => true,
            Location::Home => record.home,
            Location::Away => !record.home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    All,
    Last5,
    Last10,
}

impl Window {
    pub fn cap(self) -> Option<usize> {
        match self {
            Window::All => None,
            Window::Last5 => Some(5),
            Window::Last10 => Some(10),
        }
    }
}

/// Every query parameter threaded explicitly through the pipeline.
/// There is no ambient selection state anywhere in the engine.
#[derive(Debug, Clone)]
pub struct QueryContext {
    pub team: Option<String>,
    pub player: Option<String>,
    pub opponent: Option<String>,
    pub location: Location,
    pub window: Window,
}

impl Default for QueryContext {
    fn default() -> Self {
        Self {
            team: None,
            player: None,
            opponent: None,
            location: Location::All,
            window: Window::Last10,
        }
    }
}

impl QueryContext {
    pub fn is_selected(&self, player: &str) -> bool {
        self.player
            .as_deref()
            .is_some_and(|p| p.eq_ignore_ascii_case(player))
    }
}

/// Most recent game first; records without a usable timestamp sink to the end.
pub fn sort_recent_first(games: &mut [GameRecord]) {
    games.sort_by(|a, b| b.played_at.cmp(&a.played_at));
}

/// Location filter, then recency sort, then the window truncation.
/// Truncation happens last so "last 10 home games" means the 10 most recent
/// home games rather than the home subset of the 10 most recent games.
pub fn filter_games(games: &[GameRecord], location: Location, window: Window) -> Vec<GameRecord> {
    let mut out: Vec<GameRecord> = games
        .iter()
        .filter(|g| location.admits(g))
        .cloned()
        .collect();
    sort_recent_first(&mut out);
    if let Some(cap) = window.cap() {
        out.truncate(cap);
    }
    out
}

/// Full participating log for one player, most recent first.
/// Rows with points+rebounds+assists == 0 are DNP placeholders and are
/// excluded from every individual-player view.
pub fn player_log(games: &[GameRecord], player: &str) -> Vec<GameRecord> {
    let mut out: Vec<GameRecord> = games
        .iter()
        .filter(|g| g.player == player && g.participated())
        .cloned()
        .collect();
    sort_recent_first(&mut out);
    out
}

/// Distinct team full names, alphabetical.
pub fn team_list(games: &[GameRecord]) -> Vec<String> {
    let mut teams: Vec<String> = games.iter().map(|g| g.team.clone()).collect();
    teams.sort();
    teams.dedup();
    teams
}

/// Distinct opponent full names, alphabetical.
pub fn opponent_list(games: &[GameRecord]) -> Vec<String> {
    let mut opps: Vec<String> = games.iter().map(|g| g.opponent.clone()).collect();
    opps.sort();
    opps.dedup();
    opps
}

/// Players on one team, ordered by descending mean minutes so rotation
/// players surface before bench depth.
pub fn players_for_team(games: &[GameRecord], team: &str) -> Vec<String> {
    let mut minutes: HashMap<&str, (f64, usize)> = HashMap::new();
    for g in games.iter().filter(|g| g.team == team) {
        let entry = minutes.entry(g.player.as_str()).or_insert((0.0, 0));
        entry.0 += g.minutes;
        entry.1 += 1;
    }
    let mut ranked: Vec<(String, f64)> = minutes
        .into_iter()
        .map(|(name, (total, n))| (name.to_string(), total / n as f64))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::game;

    fn sample() -> Vec<GameRecord> {
        vec![
            game("X", "2024-01-01", true, 10.0, 5.0, 2.0),
            game("X", "2024-01-03", false, 20.0, 6.0, 3.0),
            game("X", "2024-01-05", true, 30.0, 7.0, 4.0),
            game("X", "2024-01-07", false, 40.0, 8.0, 5.0),
        ]
    }

    #[test]
    fn window_truncates_after_location_filter() {
        let games = sample();
        let home = filter_games(&games, Location::Home, Window::Last5);
        assert_eq!(home.len(), 2);
        assert!(home.iter().all(|g| g.home));
        // Most recent home game first.
        assert_eq!(home[0].points, 30.0);
    }

    #[test]
    fn window_bounds_result_length() {
        let games = sample();
        for (window, cap) in [(Window::All, usize::MAX), (Window::Last5, 5), (Window::Last10, 10)] {
            let filtered = filter_games(&games, Location::All, window);
            assert!(filtered.len() <= games.len().min(cap));
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let games = sample();
        let once = filter_games(&games, Location::Away, Window::Last5);
        let twice = filter_games(&once, Location::Away, Window::Last5);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.played_at, b.played_at);
            assert_eq!(a.points, b.points);
        }
    }

    #[test]
    fn unknown_dates_sort_last() {
        let mut games = sample();
        let mut undated = game("X", "2024-01-02", true, 99.0, 0.0, 1.0);
        undated.played_at = None;
        games.push(undated);
        let sorted = filter_games(&games, Location::All, Window::All);
        assert_eq!(sorted.last().unwrap().points, 99.0);
    }

    #[test]
    fn player_log_drops_dnp_rows() {
        let mut games = sample();
        games.push(game("X", "2024-01-09", true, 0.0, 0.0, 0.0));
        let log = player_log(&games, "X");
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn players_ranked_by_mean_minutes() {
        let mut a = game("A", "2024-01-01", true, 10.0, 2.0, 1.0);
        a.team = "Utah Jazz".to_string();
        a.minutes = 12.0;
        let mut b = game("B", "2024-01-01", true, 10.0, 2.0, 1.0);
        b.team = "Utah Jazz".to_string();
        b.minutes = 34.0;
        let ranked = players_for_team(&[a, b], "Utah Jazz");
        assert_eq!(ranked, vec!["B".to_string(), "A".to_string()]);
    }
}
