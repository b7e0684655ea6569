use tracing::debug;

use crate::dataset::{BettingLine, GameRecord};
use crate::query::{self, QueryContext};
use crate::stats::{self, StatKey};

/// Case-insensitive substring match in either direction, so a line keyed
/// "Tatum" finds "Jayson Tatum" and vice versa. This is a documented
/// heuristic: short names can over-match, which is why exact matches are
/// always tried first.
fn fuzzy_name_match(record_name: &str, line_name: &str) -> bool {
    if line_name.is_empty() {
        return false;
    }
    let record = record_name.to_lowercase();
    let line = line_name.to_lowercase();
    record.contains(&line) || line.contains(&record)
}

/// Betting lines recorded for one player name, exact match preferred.
pub fn lines_for_player<'a>(lines: &'a [BettingLine], player: &str) -> Vec<&'a BettingLine> {
    let exact: Vec<&BettingLine> = lines
        .iter()
        .filter(|l| l.player.eq_ignore_ascii_case(player))
        .collect();
    if !exact.is_empty() {
        return exact;
    }
    lines
        .iter()
        .filter(|l| fuzzy_name_match(player, &l.player))
        .collect()
}

/// Game records matching one line's player name, exact match preferred.
/// DNP rows are excluded, as in every other per-player path.
pub fn games_for_line(games: &[GameRecord], line: &BettingLine) -> Vec<GameRecord> {
    if line.player.is_empty() {
        return Vec::new();
    }
    let exact: Vec<GameRecord> = games
        .iter()
        .filter(|g| g.participated() && g.player.eq_ignore_ascii_case(&line.player))
        .cloned()
        .collect();
    if !exact.is_empty() {
        return exact;
    }
    games
        .iter()
        .filter(|g| g.participated() && fuzzy_name_match(&g.player, &line.player))
        .cloned()
        .collect()
}

pub fn line_value(line: &BettingLine, stat: StatKey) -> Option<f64> {
    match stat {
        StatKey::Points => line.points,
        StatKey::Rebounds => line.rebounds,
        StatKey::PointsRebounds => line.points_rebounds,
        StatKey::Assists => line.assists,
        StatKey::ThreesMade => line.threes_made,
        StatKey::Minutes => None,
    }
}

/// Projection table row for the selected player: in-sample median hit rate
/// next to the user-line hit rate. `None` percentages render as "–".
#[derive(Debug, Clone)]
pub struct ProjectionRow {
    pub stat: StatKey,
    pub median: f64,
    pub over_median_pct: Option<f64>,
    pub line: Option<f64>,
    pub over_line_pct: Option<f64>,
}

pub fn projection_vs_line(
    filtered: &[GameRecord],
    line: Option<&BettingLine>,
) -> Vec<ProjectionRow> {
    StatKey::BETTABLE
        .iter()
        .map(|stat| {
            let median = stats::summarize_stat(filtered, *stat).median;
            let line_value = line.and_then(|l| line_value(l, *stat));
            ProjectionRow {
                stat: *stat,
                median,
                over_median_pct: stats::hit_rate(filtered, *stat, median),
                line: line_value,
                over_line_pct: line_value.and_then(|v| stats::hit_rate(filtered, *stat, v)),
            }
        })
        .collect()
}

/// League-wide line insights: one row per betting line with hit rates of the
/// context-filtered matching games against each posted value.
#[derive(Debug, Clone)]
pub struct LineInsightRow {
    pub team: String,
    pub player: String,
    pub games: usize,
    pub points_line: Option<f64>,
    pub points_pct: Option<f64>,
    pub rebounds_line: Option<f64>,
    pub rebounds_pct: Option<f64>,
    pub points_rebounds_line: Option<f64>,
    pub points_rebounds_pct: Option<f64>,
    pub detail: String,
}

pub fn scan_line_insights(
    games: &[GameRecord],
    lines: &[BettingLine],
    ctx: &QueryContext,
) -> Vec<LineInsightRow> {
    let mut rows = Vec::new();
    for line in lines {
        if ctx.team.as_deref().is_some_and(|team| line.team != team) {
            continue;
        }
        let matched = games_for_line(games, line);
        let filtered = query::filter_games(&matched, ctx.location, ctx.window);
        if filtered.is_empty() {
            continue;
        }
        let rate = |stat: StatKey, value: Option<f64>| {
            value.and_then(|v| stats::hit_rate(&filtered, stat, v))
        };
        rows.push(LineInsightRow {
            team: line.team.clone(),
            player: filtered[0].player.clone(),
            games: filtered.len(),
            points_line: line.points,
            points_pct: rate(StatKey::Points, line.points),
            rebounds_line: line.rebounds,
            rebounds_pct: rate(StatKey::Rebounds, line.rebounds),
            points_rebounds_line: line.points_rebounds,
            points_rebounds_pct: rate(StatKey::PointsRebounds, line.points_rebounds),
            detail: line.detail.clone(),
        });
    }
    debug!(lines = lines.len(), rows = rows.len(), "line insight scan");
    rows
}
