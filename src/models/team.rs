//! TeamRecord: per-team group stage aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Points awarded for a win.
pub const POINTS_FOR_WIN: u32 = 3;
/// Points awarded for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

/// A team's running totals within its group. Points are only ever derived from results.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub games_played: u32,
}

impl TeamRecord {
    /// Create a new record with the given name. Totals start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Apply one match result from this team's point of view. Totals saturate at `u32::MAX`;
    /// use [`TeamRecord::after_match`] to detect overflow instead.
    pub fn update_stats(&mut self, goals_for: u32, goals_against: u32) {
        self.games_played = self.games_played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
        self.points = self.points.saturating_add(Self::points_for(goals_for, goals_against));
    }

    /// The record as it would be after one more match, or `None` if any total overflows.
    pub fn after_match(&self, goals_for: u32, goals_against: u32) -> Option<TeamRecord> {
        Some(TeamRecord {
            name: self.name.clone(),
            points: self
                .points
                .checked_add(Self::points_for(goals_for, goals_against))?,
            goals_for: self.goals_for.checked_add(goals_for)?,
            goals_against: self.goals_against.checked_add(goals_against)?,
            games_played: self.games_played.checked_add(1)?,
        })
    }

    fn points_for(goals_for: u32, goals_against: u32) -> u32 {
        if goals_for > goals_against {
            POINTS_FOR_WIN
        } else if goals_for == goals_against {
            POINTS_FOR_DRAW
        } else {
            0
        }
    }

    /// Goals for minus goals against (display only; ranking does not use it).
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} games, {} GF, {} GA, {} points",
            self.name, self.games_played, self.goals_for, self.goals_against, self.points
        )
    }
}
