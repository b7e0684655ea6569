use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};

use nba_scout::consistency::{self, CeilingRow, FloorRow};
use nba_scout::lines;
use nba_scout::load;
use nba_scout::matchup;
use nba_scout::query::{self, Location, QueryContext, Window};
use nba_scout::report;
use nba_scout::tips;

const SCAN_ROWS: usize = 10;

struct Args {
    data_dir: PathBuf,
    ctx: QueryContext,
}

fn parse_args() -> Result<Args> {
    let mut data_dir = PathBuf::from(".");
    let mut ctx = QueryContext::default();

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--player" => ctx.player = argv.next(),
            "--team" => ctx.team = argv.next(),
            "--opponent" => ctx.opponent = argv.next(),
            "--location" => {
                ctx.location = match argv.next().as_deref() {
                    Some("home") => Location::Home,
                    Some("away") => Location::Away,
                    Some("all") | None => Location::All,
                    Some(other) => bail!("unknown location '{other}' (home|away|all)"),
                }
            }
            "--window" => {
                ctx.window = match argv.next().as_deref() {
                    Some("5") => Window::Last5,
                    Some("10") => Window::Last10,
                    Some("all") | None => Window::All,
                    Some(other) => bail!("unknown window '{other}' (5|10|all)"),
                }
            }
            "--help" | "-h" => {
                println!(
                    "usage: nba_scout [DATA_DIR] [--player NAME] [--team FULL_NAME] \
                     [--opponent FULL_NAME] [--location home|away|all] [--window 5|10|all]"
                );
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}'"),
            path => data_dir = PathBuf::from(path),
        }
    }
    Ok(Args { data_dir, ctx })
}

fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.0}%"),
        None => "\u{2013}".to_string(),
    }
}

fn fmt_line(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "\u{2013}".to_string(),
    }
}

fn print_player_section(tables: &load::SourceTables, ctx: &QueryContext, player: &str) {
    let log = query::player_log(&tables.games, player);
    let profile = report::player_profile(&log, &tables.images, player);
    println!("\n== {} ({}) ==", profile.name.to_uppercase(), profile.position);
    println!("image: {}", profile.image_path);

    let filtered = query::filter_games(&log, ctx.location, ctx.window);
    if filtered.is_empty() {
        println!("no games for the current filters");
        return;
    }

    println!("\nGame history:");
    println!(
        "{:<12} {:<26} {:<5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "DATE", "OPPONENT", "LOC", "PTS", "REB", "P+R", "AST", "3PTS", "MIN"
    );
    for row in report::game_log_rows(&filtered) {
        println!(
            "{:<12} {:<26} {:<5} {:>5.0} {:>5.0} {:>5.0} {:>5.0} {:>5.0} {:>5.1}",
            row.date,
            row.opponent,
            row.location,
            row.points,
            row.rebounds,
            row.points_rebounds,
            row.assists,
            row.threes_made,
            row.minutes
        );
    }

    println!("\nQuick insights:");
    println!("{:<6} {:>8} {:>8} {:>8} {:>8}", "STAT", "MEDIAN", "MEAN", "MIN", "MAX");
    for (stat, summary) in report::quick_insights(&filtered) {
        println!(
            "{:<6} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
            stat.label(),
            summary.median,
            summary.mean,
            summary.min,
            summary.max
        );
    }

    let player_lines = lines::lines_for_player(&tables.lines, player);
    println!("\nProjection vs line:");
    println!("{:<6} {:>8} {:>8} {:>8} {:>8}", "STAT", "MEDIAN", "%>MED", "LINE", "%>LINE");
    for row in lines::projection_vs_line(&filtered, player_lines.first().copied()) {
        println!(
            "{:<6} {:>8.1} {:>8} {:>8} {:>8}",
            row.stat.label(),
            row.median,
            fmt_pct(row.over_median_pct),
            fmt_line(row.line),
            fmt_pct(row.over_line_pct)
        );
    }

    if let Some(opponent) = ctx.opponent.as_deref() {
        match matchup::head_to_head(&log, opponent) {
            Some(h2h) => println!(
                "\nH2H vs {opponent}: {} games | PTS {:.1} | REB {:.1} | AST {:.1} | P+R {:.1}",
                h2h.games, h2h.points, h2h.rebounds, h2h.assists, h2h.points_rebounds
            ),
            None => println!("\nH2H vs {opponent}: no history"),
        }
    }
}

fn print_floor_rows(rows: &[FloorRow]) {
    println!(
        "{:<24} {:>7} {:>7} {:>6} | {:>7} {:>7} {:>6}",
        "PLAYER", "MED PTS", "MIN PTS", "CONF", "MED P+R", "MIN P+R", "CONF"
    );
    for row in rows.iter().take(SCAN_ROWS) {
        let marker = if row.is_selected { "*" } else { " " };
        println!(
            "{marker}{:<23} {:>7.1} {:>7.1} {:>5.0}% | {:>7.1} {:>7.1} {:>5.0}%",
            row.player,
            row.points.baseline,
            row.points.observed,
            row.points.ratio,
            row.points_rebounds.baseline,
            row.points_rebounds.observed,
            row.points_rebounds.ratio
        );
    }
}

fn print_ceiling_rows(rows: &[CeilingRow]) {
    println!(
        "{:<24} {:>7} {:>7} {:>6} | {:>7} {:>7} {:>6}",
        "PLAYER", "MED PTS", "MAX PTS", "COMP", "MED P+R", "MAX P+R", "COMP"
    );
    for row in rows.iter().take(SCAN_ROWS) {
        let marker = if row.is_selected { "*" } else { " " };
        println!(
            "{marker}{:<23} {:>7.1} {:>7.1} {:>5.0}% | {:>7.1} {:>7.1} {:>5.0}%",
            row.player,
            row.points.baseline,
            row.points.observed,
            row.points.ratio,
            row.points_rebounds.baseline,
            row.points_rebounds.observed,
            row.points_rebounds.ratio
        );
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt::init();

    let args = parse_args()?;
    let ctx = args.ctx;

    // A missing input table aborts the whole session with one message; there
    // is no partial dashboard state.
    let tables = match load::load_tables(&args.data_dir) {
        Ok(tables) => tables,
        Err(err) => {
            eprintln!("load failed: {err:#}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(team) = ctx.team.as_deref() {
        let roster = query::players_for_team(&tables.games, team);
        println!("== {team} rotation (by mean minutes) ==");
        for name in roster.iter().take(SCAN_ROWS) {
            println!("  {name}");
        }
    }

    if let Some(player) = ctx.player.as_deref() {
        print_player_section(&tables, &ctx, player);
    }

    if let Some(opponent) = ctx.opponent.as_deref() {
        println!("\n== Defensive gaps vs {opponent} ==");
        println!("{:<6} {:>6} {:>6} {:>6}", "POS", "PTS", "REB", "3PTS");
        for gap in matchup::defensive_gaps(&tables.games, opponent) {
            println!(
                "{:<6} {:>6.1} {:>6.1} {:>6.1}",
                gap.position, gap.points, gap.rebounds, gap.threes_made
            );
        }
    }

    println!("\n== Trend: over season median ==");
    println!(
        "{:<24} {:>7} {:>6} {:>7} {:>6} {:>7} {:>6} {:>7} {:>6}",
        "PLAYER", "MED PTS", "%PTS", "MED REB", "%REB", "MED AST", "%AST", "MED P+R", "%P+R"
    );
    for row in consistency::scan_trend(&tables.games, &ctx).iter().take(SCAN_ROWS) {
        let marker = if row.is_selected { "*" } else { " " };
        println!(
            "{marker}{:<23} {:>7.1} {:>5.0}% {:>7.1} {:>5.0}% {:>7.1} {:>5.0}% {:>7.1} {:>5.0}%",
            row.player,
            row.points.median,
            row.points.over_pct,
            row.rebounds.median,
            row.rebounds.over_pct,
            row.assists.median,
            row.assists.over_pct,
            row.points_rebounds.median,
            row.points_rebounds.over_pct
        );
    }

    println!("\n== Consistency: floor vs median ==");
    print_floor_rows(&consistency::scan_floor(&tables.games, &ctx));

    println!("\n== Ceiling compression: median vs max ==");
    print_ceiling_rows(&consistency::scan_ceiling(&tables.games, &ctx));

    println!("\n== Line insights ==");
    println!(
        "{:<24} {:<22} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "PLAYER", "TEAM", "GAMES", "L.PTS", "%PTS", "L.REB", "%REB", "L.P+R", "%P+R"
    );
    for row in lines::scan_line_insights(&tables.games, &tables.lines, &ctx) {
        println!(
            "{:<24} {:<22} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}  {}",
            row.player,
            row.team,
            row.games,
            fmt_line(row.points_line),
            fmt_pct(row.points_pct),
            fmt_line(row.rebounds_line),
            fmt_pct(row.rebounds_pct),
            fmt_line(row.points_rebounds_line),
            fmt_pct(row.points_rebounds_pct),
            row.detail
        );
    }

    println!("\n== Tips of the day ==");
    let recommendations = tips::recommend(&tables.games, &tables.lines, ctx.window);
    if recommendations.is_empty() {
        println!("no high-confidence overs for the current window");
    } else {
        println!(
            "{:<24} {:<22} {:<7} {:>6} {:>6} {:>6}",
            "PLAYER", "TEAM", "MARKET", "LINE", "FLOOR", "CONF"
        );
        for tip in recommendations {
            println!(
                "{:<24} {:<22} {:<7} {:>6.1} {:>6.1} {:>5.0}%",
                tip.player,
                tip.team,
                tip.market.label(),
                tip.line,
                tip.floor,
                tip.confidence
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
