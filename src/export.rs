//! Spreadsheet exchange: standings export and group match import as CSV.
//!
//! Readers and writers are supplied by the caller; nothing here opens files.

use crate::models::{Tournament, TournamentError};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One exported standings line.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Games Played")]
    pub games_played: u32,
    #[serde(rename = "Goals For")]
    pub goals_for: u32,
    #[serde(rename = "Goals Against")]
    pub goals_against: u32,
    #[serde(rename = "Points")]
    pub points: u32,
}

/// One imported group match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "Team 1")]
    pub team_1: String,
    #[serde(rename = "Goals 1")]
    pub goals_1: u32,
    #[serde(rename = "Team 2")]
    pub team_2: String,
    #[serde(rename = "Goals 2")]
    pub goals_2: u32,
}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::Csv(e.to_string())
    }
}

/// Standings of every group, groups in creation order and teams in ranked order.
pub fn standings_rows(tournament: &Tournament) -> Vec<StandingsRow> {
    tournament
        .groups
        .iter()
        .flat_map(|g| {
            g.standings().into_iter().map(move |t| StandingsRow {
                group: g.name.clone(),
                team: t.name,
                games_played: t.games_played,
                goals_for: t.goals_for,
                goals_against: t.goals_against,
                points: t.points,
            })
        })
        .collect()
}

/// Write all standings as CSV with a header row.
pub fn write_standings_csv<W: Write>(
    tournament: &Tournament,
    writer: W,
) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in standings_rows(tournament) {
        wtr.serialize(row)?;
    }
    wtr.flush()
        .map_err(|e| TournamentError::Csv(e.to_string()))?;
    Ok(())
}

/// Parse group match rows (`Group, Team 1, Goals 1, Team 2, Goals 2`). Fields are trimmed.
pub fn read_match_rows<R: Read>(reader: R) -> Result<Vec<MatchRow>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Replay imported matches into the tournament. Returns how many were recorded.
///
/// Rows are applied to a copy first; if any row fails the tournament is left untouched.
/// A bad row (unknown group or team, overflowing score) is reported as a `Validation` error
/// prefixed with its 1-based data row; outside the group stage the error is `InvalidState`.
pub fn import_match_results<R: Read>(
    tournament: &mut Tournament,
    reader: R,
) -> Result<usize, TournamentError> {
    let rows = read_match_rows(reader)?;
    let mut scratch = tournament.clone();
    for (i, row) in rows.iter().enumerate() {
        scratch
            .record_match(&row.group, &row.team_1, row.goals_1, &row.team_2, row.goals_2)
            .map_err(|e| match e {
                TournamentError::InvalidState => e,
                other => TournamentError::Validation(format!("row {}: {}", i + 1, other)),
            })?;
    }
    *tournament = scratch;
    log::info!("Imported {} group matches", rows.len());
    Ok(rows.len())
}
