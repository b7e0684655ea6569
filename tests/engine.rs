use std::path::PathBuf;

use nba_scout::consistency;
use nba_scout::lines;
use nba_scout::load::{self, SourceTables};
use nba_scout::matchup;
use nba_scout::query::{self, Location, QueryContext, Window};
use nba_scout::stats::{self, StatKey};
use nba_scout::tips;

fn fixture_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path
}

fn tables() -> SourceTables {
    load::load_tables(&fixture_dir()).expect("fixture tables should load")
}

#[test]
fn last10_home_games_median_and_floor() {
    let tables = tables();
    let log = query::player_log(&tables.games, "Xavier Prop");
    // Five source rows: one DNP placeholder drops out, the undated game stays.
    assert_eq!(log.len(), 4);

    let filtered = query::filter_games(&log, Location::Home, Window::Last10);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|g| g.home));

    let pts = stats::summarize_stat(&filtered, StatKey::Points);
    assert_eq!(pts.median, 29.0);
    assert_eq!(pts.min, 28.0);
}

#[test]
fn line_hit_rate_over_the_home_window() {
    let tables = tables();
    let log = query::player_log(&tables.games, "Xavier Prop");
    let filtered = query::filter_games(&log, Location::Home, Window::Last10);

    let player_lines = lines::lines_for_player(&tables.lines, "Xavier Prop");
    assert_eq!(player_lines.len(), 1);
    assert_eq!(player_lines[0].points, Some(28.0));

    // Only the 30-point game clears the line; the 28-point game ties it and
    // a tie is never a hit.
    let rate = stats::hit_rate(&filtered, StatKey::Points, 28.0);
    assert_eq!(rate, Some(50.0));

    let rows = lines::projection_vs_line(&filtered, player_lines.first().copied());
    let pts_row = rows.iter().find(|r| r.stat == StatKey::Points).unwrap();
    assert_eq!(pts_row.over_line_pct, Some(50.0));
    // The rebounds line came in with a locale decimal comma.
    let reb_row = rows.iter().find(|r| r.stat == StatKey::Rebounds).unwrap();
    assert_eq!(reb_row.line, Some(9.5));
}

#[test]
fn head_to_head_uses_the_full_history() {
    let tables = tables();
    let log = query::player_log(&tables.games, "Xavier Prop");
    let h2h = matchup::head_to_head(&log, "Los Angeles Lakers").unwrap();
    assert_eq!(h2h.games, 2);
    assert_eq!(h2h.points, 29.0);
    assert_eq!(h2h.rebounds, 11.0);
}

#[test]
fn defensive_gaps_rank_positions_against_one_opponent() {
    let tables = tables();
    let gaps = matchup::defensive_gaps(&tables.games, "Los Angeles Lakers");
    assert!(!gaps.is_empty());
    assert!(gaps.len() <= 3);
    // SG rows (Xavier) outscore PF rows (Marcus) against the Lakers.
    assert_eq!(gaps[0].position, "SG");
    for pair in gaps.windows(2) {
        assert!(pair[0].points >= pair[1].points);
    }
}

#[test]
fn scans_keep_rotation_players_only() {
    let tables = tables();
    let ctx = QueryContext::default();
    let rows = consistency::scan_floor(&tables.games, &ctx);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player, "Xavier Prop");

    let ceiling = consistency::scan_ceiling(&tables.games, &ctx);
    assert_eq!(ceiling.len(), 1);
    assert!(ceiling[0].points.ratio > 0.0);
    assert!(ceiling[0].points.ratio <= 100.0);
}

#[test]
fn tips_follow_the_line_location_qualifier() {
    let tables = tables();
    let recommendations = tips::recommend(&tables.games, &tables.lines, Window::Last10);
    // Xavier's home-qualified line clears the cutoff on all three markets
    // (floors 28 pts / 10 reb / 40 P+R against 28 / 9.5 / 38) and Dunk
    // Center's rebounds line clears with floor 11 vs 10.
    assert_eq!(recommendations.len(), 4);
    assert_eq!(recommendations[0].player, "Dunk Center");
    assert_eq!(
        recommendations
            .iter()
            .filter(|t| t.player == "Xavier Prop")
            .count(),
        3
    );
    for tip in &recommendations {
        assert!(tip.confidence > tips::CONFIDENCE_CUTOFF);
    }
    for pair in recommendations.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    // The unmatched "Nobody Known" line contributes nothing.
    assert!(recommendations.iter().all(|t| t.team != "XYZ"));
}

#[test]
fn roster_and_team_lists_come_back_canonical() {
    let tables = tables();
    let teams = query::team_list(&tables.games);
    assert!(teams.contains(&"Boston Celtics".to_string()));
    assert!(teams.contains(&"Los Angeles Lakers".to_string()));

    let roster = query::players_for_team(&tables.games, "Boston Celtics");
    assert_eq!(roster[0], "Xavier Prop");
    assert!(roster.contains(&"Marcus Bench".to_string()));
}
