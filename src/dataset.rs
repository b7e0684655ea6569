use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::query::Location;
use crate::teams;

/// One player's stat line for one game, fully typed and canonicalized.
/// Immutable after normalization; the whole table is rebuilt on reload.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub player: String,
    pub team: String,
    pub opponent: String,
    pub played_at: Option<NaiveDateTime>,
    pub date_label: String,
    pub home: bool,
    pub position: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub threes_made: f64,
    pub minutes: f64,
    pub points_rebounds: f64,
}

impl GameRecord {
    /// A row where the player recorded no points, rebounds, or assists is a
    /// DNP placeholder, not a real appearance.
    pub fn participated(&self) -> bool {
        self.points + self.rebounds + self.assists > 0.0
    }
}

/// An externally supplied betting line for one player. Absent/malformed
/// numeric fields are `None` ("no line"), never an error.
#[derive(Debug, Clone)]
pub struct BettingLine {
    pub player: String,
    pub team: String,
    pub location: Option<Location>,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub points_rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub threes_made: Option<f64>,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct PlayerImageEntry {
    pub player: String,
    pub image_path: String,
}

/// Raw game-log row as it appears in the season CSV. Every field stays a
/// string here; typing happens in normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGameRow {
    #[serde(rename = "Nome", default)]
    pub first_name: String,
    #[serde(rename = "Sobrenome", default)]
    pub last_name: String,
    #[serde(rename = "Nome_Time", default)]
    pub team: String,
    #[serde(rename = "Nome_Oponente", default)]
    pub opponent: String,
    #[serde(rename = "Data_Hora_Jogo", default)]
    pub played_at: String,
    #[serde(rename = "Casa", default)]
    pub home: String,
    #[serde(rename = "Posicao_Jogador", default)]
    pub position: String,
    #[serde(rename = "Pontos", default)]
    pub points: String,
    #[serde(rename = "Rebotes", default)]
    pub rebounds: String,
    #[serde(rename = "Assistencias", default)]
    pub assists: String,
    #[serde(rename = "3PTS_Feitos", default)]
    pub threes_made: String,
    #[serde(rename = "Minutos", default)]
    pub minutes: String,
}

/// Raw betting-line row. Headers are lowercased by the loader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineRow {
    #[serde(rename = "jogador", default)]
    pub player: String,
    #[serde(rename = "equipe", default)]
    pub team_abbrev: String,
    #[serde(rename = "local", default)]
    pub location: String,
    #[serde(rename = "pts", default)]
    pub points: String,
    #[serde(rename = "reb", default)]
    pub rebounds: String,
    #[serde(rename = "pr", default)]
    pub points_rebounds: String,
    #[serde(rename = "ast", default)]
    pub assists: String,
    #[serde(rename = "3p", default)]
    pub threes_made: String,
    #[serde(rename = "detalhe", default)]
    pub detail: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImageRow {
    #[serde(rename = "Nome", default)]
    pub first_name: String,
    #[serde(rename = "Sobrenome", default)]
    pub last_name: String,
    #[serde(rename = "image_path", default)]
    pub image_path: String,
}

pub fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim())
}

/// Lenient numeric parse: trims, tolerates a locale decimal comma.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    s.replace(',', ".").parse::<f64>().ok()
}

/// Stat coercion for game rows: parse failure is 0.0, never an error.
pub fn parse_stat(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Line values: parse failure, blank, and non-positive all mean "no line".
pub fn parse_line_value(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|v| *v > 0.0)
}

const GAME_TIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

const GAME_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y"];

/// Day-first timestamp parse. Unparsable values become `None`, not an error;
/// such records sort last and simply fall out of recency windows.
pub fn parse_game_time(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in GAME_TIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(t);
        }
    }
    for fmt in GAME_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

fn date_label(played_at: Option<NaiveDateTime>) -> String {
    played_at
        .map(|t| t.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn parse_location_qualifier(raw: &str) -> Option<Location> {
    match raw.trim().to_lowercase().as_str() {
        "casa" | "home" => Some(Location::Home),
        "fora" | "away" => Some(Location::Away),
        _ => None,
    }
}

pub fn normalize_game(row: &RawGameRow) -> GameRecord {
    let played_at = parse_game_time(&row.played_at);
    let points = parse_stat(&row.points);
    let rebounds = parse_stat(&row.rebounds);
    GameRecord {
        player: full_name(&row.first_name, &row.last_name),
        team: teams::canonical_team(&row.team),
        opponent: teams::canonical_team(&row.opponent),
        date_label: date_label(played_at),
        played_at,
        home: parse_stat(&row.home) > 0.5,
        position: row.position.trim().to_string(),
        points,
        rebounds,
        assists: parse_stat(&row.assists),
        threes_made: parse_stat(&row.threes_made),
        minutes: parse_stat(&row.minutes),
        points_rebounds: points + rebounds,
    }
}

pub fn normalize_games(rows: &[RawGameRow]) -> Vec<GameRecord> {
    rows.iter().map(normalize_game).collect()
}

pub fn normalize_line(row: &RawLineRow) -> BettingLine {
    BettingLine {
        player: row.player.trim().to_string(),
        team: teams::team_from_abbrev(&row.team_abbrev),
        location: parse_location_qualifier(&row.location),
        points: parse_line_value(&row.points),
        rebounds: parse_line_value(&row.rebounds),
        points_rebounds: parse_line_value(&row.points_rebounds),
        assists: parse_line_value(&row.assists),
        threes_made: parse_line_value(&row.threes_made),
        detail: row.detail.trim().to_string(),
    }
}

pub fn normalize_lines(rows: &[RawLineRow]) -> Vec<BettingLine> {
    rows.iter().map(normalize_line).collect()
}

pub fn normalize_image(row: &RawImageRow) -> PlayerImageEntry {
    PlayerImageEntry {
        player: full_name(&row.first_name, &row.last_name),
        image_path: row.image_path.trim().to_string(),
    }
}

pub fn normalize_images(rows: &[RawImageRow]) -> Vec<PlayerImageEntry> {
    rows.iter().map(normalize_image).collect()
}

#[cfg(test)]
pub mod test_support {
    use super::GameRecord;
    use chrono::NaiveDate;

    /// Minimal record builder for unit tests; date is `YYYY-MM-DD`.
    pub fn game(player: &str, date: &str, home: bool, pts: f64, reb: f64, ast: f64) -> GameRecord {
        let played_at = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(19, 30, 0));
        GameRecord {
            player: player.to_string(),
            team: "Boston Celtics".to_string(),
            opponent: "Miami Heat".to_string(),
            date_label: date.to_string(),
            played_at,
            home,
            position: "SG".to_string(),
            points: pts,
            rebounds: reb,
            assists: ast,
            threes_made: 1.0,
            minutes: 30.0,
            points_rebounds: pts + reb,
        }
    }
}
