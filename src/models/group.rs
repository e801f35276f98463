//! GroupTable: the teams of one group and their standings.

use crate::models::team::TeamRecord;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Standings order: points desc, then goals for desc, then goals against asc.
///
/// Goal difference is not a key. Equal records compare `Equal`, so a
/// stable sort keeps them in their existing order.
pub fn compare_standing(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.goals_against.cmp(&b.goals_against))
}

/// One group of the group stage.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupTable {
    pub name: String,
    /// Teams in the order they were added (used as the final tie-break).
    pub teams: Vec<TeamRecord>,
}

impl GroupTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teams: Vec::new(),
        }
    }

    /// Add a team. Re-adding an existing name is a no-op.
    pub fn add_team(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.teams.push(TeamRecord::new(name));
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t.name == name)
    }

    pub fn team(&self, name: &str) -> Option<&TeamRecord> {
        self.teams.iter().find(|t| t.name == name)
    }

    fn position(&self, name: &str) -> Result<usize, TournamentError> {
        self.teams
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| {
                TournamentError::Validation(format!(
                    "unknown team in group {}: {}",
                    self.name, name
                ))
            })
    }

    /// Record a group match. Both teams must already be in the group; on error nothing changes.
    pub fn record_match(
        &mut self,
        team_1: &str,
        goals_1: u32,
        team_2: &str,
        goals_2: u32,
    ) -> Result<(), TournamentError> {
        let i = self.position(team_1)?;
        let j = self.position(team_2)?;
        if i == j {
            return Err(TournamentError::Validation(format!(
                "{} cannot play against itself",
                team_1
            )));
        }
        let overflow = || {
            TournamentError::Validation(format!(
                "score {}-{} would overflow the totals of {} or {}",
                goals_1, goals_2, team_1, team_2
            ))
        };
        let first = self.teams[i]
            .after_match(goals_1, goals_2)
            .ok_or_else(overflow)?;
        let second = self.teams[j]
            .after_match(goals_2, goals_1)
            .ok_or_else(overflow)?;
        self.teams[i] = first;
        self.teams[j] = second;
        log::debug!(
            "Group {}: {} {}-{} {}",
            self.name,
            team_1,
            goals_1,
            goals_2,
            team_2
        );
        Ok(())
    }

    /// Current standings, recomputed on every call (never cached).
    pub fn standings(&self) -> Vec<TeamRecord> {
        let mut ranked = self.teams.clone();
        ranked.sort_by(compare_standing);
        ranked
    }
}
