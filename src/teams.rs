use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Nickname -> franchise full name, one entry per league team.
/// The opponent/team filters compare against these full names, so the table
/// has to match the loader's canonicalization exactly.
pub static NICKNAME_TO_FULL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("76ers", "Philadelphia 76ers"),
        ("Bucks", "Milwaukee Bucks"),
        ("Bulls", "Chicago Bulls"),
        ("Cavaliers", "Cleveland Cavaliers"),
        ("Celtics", "Boston Celtics"),
        ("Clippers", "Los Angeles Clippers"),
        ("Grizzlies", "Memphis Grizzlies"),
        ("Hawks", "Atlanta Hawks"),
        ("Heat", "Miami Heat"),
        ("Hornets", "Charlotte Hornets"),
        ("Jazz", "Utah Jazz"),
        ("Kings", "Sacramento Kings"),
        ("Knicks", "New York Knicks"),
        ("Lakers", "Los Angeles Lakers"),
        ("Magic", "Orlando Magic"),
        ("Mavericks", "Dallas Mavericks"),
        ("Nets", "Brooklyn Nets"),
        ("Nuggets", "Denver Nuggets"),
        ("Pacers", "Indiana Pacers"),
        ("Pelicans", "New Orleans Pelicans"),
        ("Pistons", "Detroit Pistons"),
        ("Raptors", "Toronto Raptors"),
        ("Rockets", "Houston Rockets"),
        ("Spurs", "San Antonio Spurs"),
        ("Suns", "Phoenix Suns"),
        ("Thunder", "Oklahoma City Thunder"),
        ("Timberwolves", "Minnesota Timberwolves"),
        ("Trail Blazers", "Portland Trail Blazers"),
        ("Warriors", "Golden State Warriors"),
        ("Wizards", "Washington Wizards"),
    ])
});

/// Team abbreviation -> franchise full name, as used by the betting-lines table.
pub static ABBREV_TO_FULL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ATL", "Atlanta Hawks"),
        ("BOS", "Boston Celtics"),
        ("BKN", "Brooklyn Nets"),
        ("CHA", "Charlotte Hornets"),
        ("CHI", "Chicago Bulls"),
        ("CLE", "Cleveland Cavaliers"),
        ("DAL", "Dallas Mavericks"),
        ("DEN", "Denver Nuggets"),
        ("DET", "Detroit Pistons"),
        ("GSW", "Golden State Warriors"),
        ("HOU", "Houston Rockets"),
        ("IND", "Indiana Pacers"),
        ("LAC", "Los Angeles Clippers"),
        ("LAL", "Los Angeles Lakers"),
        ("MEM", "Memphis Grizzlies"),
        ("MIA", "Miami Heat"),
        ("MIL", "Milwaukee Bucks"),
        ("MIN", "Minnesota Timberwolves"),
        ("NOP", "New Orleans Pelicans"),
        ("NYK", "New York Knicks"),
        ("OKC", "Oklahoma City Thunder"),
        ("ORL", "Orlando Magic"),
        ("PHI", "Philadelphia 76ers"),
        ("PHX", "Phoenix Suns"),
        ("POR", "Portland Trail Blazers"),
        ("SAC", "Sacramento Kings"),
        ("SAS", "San Antonio Spurs"),
        ("TOR", "Toronto Raptors"),
        ("UTA", "Utah Jazz"),
        ("WAS", "Washington Wizards"),
    ])
});

/// Map a game-log team nickname to its full name. Unmapped names pass
/// through unchanged so unexpected source values stay filterable.
pub fn canonical_team(raw: &str) -> String {
    let name = raw.trim();
    NICKNAME_TO_FULL
        .get(name)
        .map(|full| (*full).to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Map a lines-table abbreviation to the full name; unknown abbreviations
/// pass through unchanged.
pub fn team_from_abbrev(raw: &str) -> String {
    let abbrev = raw.trim();
    ABBREV_TO_FULL
        .get(abbrev)
        .map(|full| (*full).to_string())
        .unwrap_or_else(|| abbrev.to_string())
}
