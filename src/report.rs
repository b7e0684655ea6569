use std::path::Path;

use crate::dataset::{GameRecord, PlayerImageEntry};
use crate::stats::{self, StatKey, StatSummary};

pub const DEFAULT_PLAYER_IMAGE: &str = "assets/perfiljogador.png";

/// One game-history display row: flat strings and numbers only, ready for a
/// table widget.
#[derive(Debug, Clone)]
pub struct GameLogRow {
    pub date: String,
    pub opponent: String,
    pub location: &'static str,
    pub points: f64,
    pub rebounds: f64,
    pub points_rebounds: f64,
    pub assists: f64,
    pub threes_made: f64,
    pub minutes: f64,
}

pub fn game_log_rows(filtered: &[GameRecord]) -> Vec<GameLogRow> {
    filtered
        .iter()
        .map(|g| GameLogRow {
            date: g.date_label.clone(),
            opponent: g.opponent.clone(),
            location: if g.home { "Home" } else { "Away" },
            points: g.points,
            rebounds: g.rebounds,
            points_rebounds: g.points_rebounds,
            assists: g.assists,
            threes_made: g.threes_made,
            minutes: g.minutes,
        })
        .collect()
}

/// The quick-insights block: median/mean/min/max per displayed stat.
pub fn quick_insights(filtered: &[GameRecord]) -> Vec<(StatKey, StatSummary)> {
    stats::summarize(filtered, &StatKey::INSIGHT)
}

#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub name: String,
    pub position: String,
    pub image_path: String,
}

/// Profile card data: position from the most recent participating game,
/// image from the lookup table with a per-name asset fallback and a default
/// placeholder.
pub fn player_profile(
    log: &[GameRecord],
    images: &[PlayerImageEntry],
    player: &str,
) -> PlayerProfile {
    let position = log
        .first()
        .map(|g| g.position.clone())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "N/A".to_string());
    PlayerProfile {
        name: player.to_string(),
        position,
        image_path: image_path(images, player),
    }
}

fn image_path(images: &[PlayerImageEntry], player: &str) -> String {
    if let Some(entry) = images
        .iter()
        .find(|e| e.player.eq_ignore_ascii_case(player))
        && !entry.image_path.is_empty()
    {
        return entry.image_path.clone();
    }
    let by_name = format!("assets/players/{player}.png");
    if Path::new(&by_name).exists() {
        return by_name;
    }
    DEFAULT_PLAYER_IMAGE.to_string()
}
