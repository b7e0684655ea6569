use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::dataset::{
    self, BettingLine, GameRecord, PlayerImageEntry, RawGameRow, RawImageRow, RawLineRow,
};

pub const GAMES_FILE: &str = "PlayerStatistics_Clean.csv";
pub const LINES_FILE: &str = "linhas.csv";
pub const IMAGES_FILE: &str = "jogadoresnba.csv";

/// The three read-only input tables, loaded once per session. A source
/// refresh means reloading the whole struct; nothing is patched in place.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub games: Vec<GameRecord>,
    pub lines: Vec<BettingLine>,
    pub images: Vec<PlayerImageEntry>,
}

/// Load and normalize all three tables from one directory. Any structurally
/// missing file fails the whole load with a single error; row-level problems
/// only degrade the affected values.
pub fn load_tables(dir: &Path) -> Result<SourceTables> {
    let games_path = dir.join(GAMES_FILE);
    let lines_path = dir.join(LINES_FILE);
    let images_path = dir.join(IMAGES_FILE);

    let missing: Vec<String> = [&games_path, &lines_path, &images_path]
        .iter()
        .filter(|p| !p.exists())
        .map(|p| p.display().to_string())
        .collect();
    if !missing.is_empty() {
        bail!("required input tables not found: {}", missing.join(", "));
    }

    let raw_games: Vec<RawGameRow> = read_rows(&games_path, Some(b';'), false)
        .with_context(|| format!("read game log {}", games_path.display()))?;
    let raw_lines: Vec<RawLineRow> = read_rows(&lines_path, None, true)
        .with_context(|| format!("read betting lines {}", lines_path.display()))?;
    let raw_images: Vec<RawImageRow> = read_rows(&images_path, None, false)
        .with_context(|| format!("read player images {}", images_path.display()))?;

    let tables = SourceTables {
        games: dataset::normalize_games(&raw_games),
        lines: dataset::normalize_lines(&raw_lines),
        images: dataset::normalize_images(&raw_images),
    };
    info!(
        games = tables.games.len(),
        lines = tables.lines.len(),
        images = tables.images.len(),
        "loaded input tables"
    );
    Ok(tables)
}

/// Read a CSV into raw rows. Headers are trimmed (and optionally lowercased,
/// for the lines table); the delimiter is sniffed from the header row unless
/// fixed; a UTF-8 BOM is stripped; non-UTF-8 bytes are replaced rather than
/// rejected. Undecodable rows are skipped, never fatal.
fn read_rows<T: DeserializeOwned>(
    path: &Path,
    delimiter: Option<u8>,
    lowercase_headers: bool,
) -> Result<Vec<T>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.trim_start_matches('\u{feff}');

    let header_line = text.lines().next().unwrap_or_default();
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(header_line));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .context("read csv header row")?
        .iter()
        .map(|h| {
            let h = h.trim();
            if lowercase_headers {
                h.to_lowercase()
            } else {
                h.to_string()
            }
        })
        .collect();
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) => debug!(row = idx + 1, %err, "skipping undecodable csv row"),
        }
    }
    Ok(rows)
}

/// Pick the delimiter that appears most often in the header row. The lines
/// and image tables arrive with varying separators depending on the export.
fn sniff_delimiter(header: &str) -> u8 {
    let mut best = b',';
    let mut best_count = 0usize;
    for candidate in [b';', b',', b'\t'] {
        let count = header.bytes().filter(|b| *b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}
