use tracing::debug;

use crate::dataset::GameRecord;
use crate::query::{self, QueryContext, Window};
use crate::stats::{self, StatKey};

/// League scans skip low-rotation players; below this mean-minutes mark the
/// samples are too noisy to rank.
pub const MIN_SCAN_MINUTES: f64 = 25.0;

/// One stat cell of a ranked row: the season baseline, the observed window
/// value, and their ratio in percent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioCell {
    pub baseline: f64,
    pub observed: f64,
    pub ratio: f64,
}

/// Floor confidence: how close the worst recent game stays to the reference
/// (season median or betting line). A reference of 0 is confidence 0.
pub fn floor_confidence(floor: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        0.0
    } else {
        floor / reference * 100.0
    }
}

/// Ceiling compression: how close the best recent game stays to the season
/// median. High compression means little explosive upside. Max 0 is 0.
pub fn ceiling_compression(median: f64, ceiling: f64) -> f64 {
    if ceiling == 0.0 {
        0.0
    } else {
        median / ceiling * 100.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrendCell {
    pub median: f64,
    pub over_pct: f64,
}

/// Players whose recent window runs above their own season median.
#[derive(Debug, Clone)]
pub struct TrendRow {
    pub player: String,
    pub is_selected: bool,
    pub points: TrendCell,
    pub rebounds: TrendCell,
    pub assists: TrendCell,
    pub points_rebounds: TrendCell,
}

/// Floor-vs-median confidence row ("safe over" ranking).
#[derive(Debug, Clone)]
pub struct FloorRow {
    pub player: String,
    pub is_selected: bool,
    pub points: RatioCell,
    pub rebounds: RatioCell,
    pub assists: RatioCell,
    pub points_rebounds: RatioCell,
}

/// Median-vs-ceiling compression row ("safe under" ranking).
#[derive(Debug, Clone)]
pub struct CeilingRow {
    pub player: String,
    pub is_selected: bool,
    pub points: RatioCell,
    pub rebounds: RatioCell,
    pub assists: RatioCell,
    pub points_rebounds: RatioCell,
}

/// Season log (location-filtered, full length) plus the recent window subset
/// for one scanned player.
struct PlayerSample {
    player: String,
    season: Vec<GameRecord>,
    recent: Vec<GameRecord>,
}

/// Gather per-player samples for the league scans. The season baseline keeps
/// the location filter but not the window; the window applies only to the
/// recent subset. Players below the rotation-minutes cut are skipped.
fn collect_samples(games: &[GameRecord], ctx: &QueryContext) -> Vec<PlayerSample> {
    let mut names: Vec<String> = games
        .iter()
        .filter(|g| ctx.team.as_deref().is_none_or(|team| g.team == team))
        .map(|g| g.player.clone())
        .collect();
    names.sort();
    names.dedup();

    let mut samples = Vec::new();
    for name in names {
        let log = query::player_log(games, &name);
        let season = query::filter_games(&log, ctx.location, Window::All);
        if season.is_empty() {
            continue;
        }
        let mean_minutes =
            season.iter().map(|g| g.minutes).sum::<f64>() / season.len() as f64;
        if mean_minutes < MIN_SCAN_MINUTES {
            continue;
        }
        let recent: Vec<GameRecord> = match ctx.window.cap() {
            Some(cap) => season.iter().take(cap).cloned().collect(),
            None => season.clone(),
        };
        if recent.is_empty() {
            continue;
        }
        samples.push(PlayerSample {
            player: name,
            season,
            recent,
        });
    }
    debug!(players = samples.len(), "collected scan samples");
    samples
}

fn trend_cell(sample: &PlayerSample, stat: StatKey) -> TrendCell {
    let median = stats::summarize_stat(&sample.season, stat).median;
    TrendCell {
        median,
        over_pct: stats::hit_rate(&sample.recent, stat, median).unwrap_or(0.0),
    }
}

/// Trend scan: a player appears when at least one stat category ran above
/// its season median in half or more of the window games.
pub fn scan_trend(games: &[GameRecord], ctx: &QueryContext) -> Vec<TrendRow> {
    collect_samples(games, ctx)
        .iter()
        .filter_map(|sample| {
            let row = TrendRow {
                player: sample.player.clone(),
                is_selected: ctx.is_selected(&sample.player),
                points: trend_cell(sample, StatKey::Points),
                rebounds: trend_cell(sample, StatKey::Rebounds),
                assists: trend_cell(sample, StatKey::Assists),
                points_rebounds: trend_cell(sample, StatKey::PointsRebounds),
            };
            let hot = [&row.points, &row.rebounds, &row.assists, &row.points_rebounds]
                .iter()
                .any(|cell| cell.over_pct >= 50.0);
            hot.then_some(row)
        })
        .collect()
}

fn floor_cell(sample: &PlayerSample, stat: StatKey) -> RatioCell {
    let median = stats::summarize_stat(&sample.season, stat).median;
    let floor = stats::summarize_stat(&sample.recent, stat).min;
    RatioCell {
        baseline: median,
        observed: floor,
        ratio: floor_confidence(floor, median),
    }
}

/// Floor-confidence scan, sorted by the points ratio descending.
pub fn scan_floor(games: &[GameRecord], ctx: &QueryContext) -> Vec<FloorRow> {
    let mut rows: Vec<FloorRow> = collect_samples(games, ctx)
        .iter()
        .map(|sample| FloorRow {
            player: sample.player.clone(),
            is_selected: ctx.is_selected(&sample.player),
            points: floor_cell(sample, StatKey::Points),
            rebounds: floor_cell(sample, StatKey::Rebounds),
            assists: floor_cell(sample, StatKey::Assists),
            points_rebounds: floor_cell(sample, StatKey::PointsRebounds),
        })
        .collect();
    rows.sort_by(|a, b| b.points.ratio.total_cmp(&a.points.ratio));
    rows
}

fn ceiling_cell(sample: &PlayerSample, stat: StatKey) -> RatioCell {
    let median = stats::summarize_stat(&sample.season, stat).median;
    let ceiling = stats::summarize_stat(&sample.recent, stat).max;
    RatioCell {
        baseline: median,
        observed: ceiling,
        ratio: ceiling_compression(median, ceiling),
    }
}

/// Ceiling-compression scan, sorted by the points ratio descending.
pub fn scan_ceiling(games: &[GameRecord], ctx: &QueryContext) -> Vec<CeilingRow> {
    let mut rows: Vec<CeilingRow> = collect_samples(games, ctx)
        .iter()
        .map(|sample| CeilingRow {
            player: sample.player.clone(),
            is_selected: ctx.is_selected(&sample.player),
            points: ceiling_cell(sample, StatKey::Points),
            rebounds: ceiling_cell(sample, StatKey::Rebounds),
            assists: ceiling_cell(sample, StatKey::Assists),
            points_rebounds: ceiling_cell(sample, StatKey::PointsRebounds),
        })
        .collect();
    rows.sort_by(|a, b| b.points.ratio.total_cmp(&a.points.ratio));
    rows
}
