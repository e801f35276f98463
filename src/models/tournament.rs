//! Tournament and TournamentError.

use crate::models::bracket::BracketTemplate;
use crate::models::group::GroupTable;
use crate::models::knockout::Knockout;
use crate::models::qualifier::QualifierSet;
use crate::models::team::TeamRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Bad input, e.g. an unknown team or an empty name.
    Validation(String),
    /// A group has fewer than two teams, so it cannot send two qualifiers.
    InsufficientTeams { group: String },
    /// Not enough third-placed teams across all groups.
    InsufficientQualifiers { found: usize, required: usize },
    /// Qualifier set and bracket template do not fit together, or the template is malformed.
    Configuration(String),
    /// A knockout score was drawn (node index within the round).
    NoWinner { node: usize },
    /// Wrong number of results for the current knockout round.
    ShapeMismatch { expected: usize, got: usize },
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// A group with this name already exists.
    DuplicateGroup(String),
    /// No group with this name.
    GroupNotFound(String),
    /// Reading or writing CSV failed.
    Csv(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::Validation(msg) => write!(f, "{}", msg),
            TournamentError::InsufficientTeams { group } => {
                write!(f, "Group {} needs at least 2 teams", group)
            }
            TournamentError::InsufficientQualifiers { found, required } => write!(
                f,
                "Need {} third-placed teams to fill the bracket, only {} available",
                required, found
            ),
            TournamentError::Configuration(msg) => write!(f, "Bracket configuration error: {}", msg),
            TournamentError::NoWinner { node } => {
                write!(f, "Match {} has no winner; knockout matches cannot be drawn", node + 1)
            }
            TournamentError::ShapeMismatch { expected, got } => {
                write!(f, "Expected {} results for this round, got {}", expected, got)
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::DuplicateGroup(name) => write!(f, "Group '{}' already exists", name),
            TournamentError::GroupNotFound(name) => write!(f, "Group '{}' does not exist", name),
            TournamentError::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// Creating groups, adding teams, recording group matches.
    #[default]
    GroupStage,
    /// Bracket assigned; knockout rounds in progress.
    Knockout,
    /// Final played; champion known.
    Completed,
}

/// Full tournament state: groups, bracket configuration, qualifiers and knockout progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Groups in creation order.
    pub groups: Vec<GroupTable>,
    /// First-round pairing table used when the knockout starts.
    pub template: BracketTemplate,
    pub phase: TournamentPhase,
    /// Set when the knockout starts.
    pub qualifiers: Option<QualifierSet>,
    pub knockout: Option<Knockout>,
}

impl Tournament {
    /// Create a new tournament with the Euro 2024 bracket and no groups.
    pub fn new() -> Self {
        Self::with_template(BracketTemplate::euro_2024())
    }

    /// Create a tournament that will seat its qualifiers using `template`.
    pub fn with_template(template: BracketTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            groups: Vec::new(),
            template,
            phase: TournamentPhase::GroupStage,
            qualifiers: None,
            knockout: None,
        }
    }

    pub fn group(&self, name: &str) -> Option<&GroupTable> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut GroupTable, TournamentError> {
        self.groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| TournamentError::GroupNotFound(name.to_string()))
    }

    fn ensure_group_stage(&self) -> Result<(), TournamentError> {
        if self.phase != TournamentPhase::GroupStage {
            return Err(TournamentError::InvalidState);
        }
        Ok(())
    }

    /// Create a group (GroupStage only). Names are trimmed and must be unique.
    pub fn add_group(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        self.ensure_group_stage()?;
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::Validation("Group name cannot be empty".into()));
        }
        if self.group(name).is_some() {
            return Err(TournamentError::DuplicateGroup(name.to_string()));
        }
        self.groups.push(GroupTable::new(name));
        Ok(())
    }

    /// Add a team to a group (GroupStage only). Re-adding to the same group is a no-op;
    /// a name already used in another group is rejected since the bracket identifies teams by name.
    pub fn add_team(&mut self, group: &str, team: impl Into<String>) -> Result<(), TournamentError> {
        self.ensure_group_stage()?;
        let team = team.into();
        let team = team.trim();
        if team.is_empty() {
            return Err(TournamentError::Validation("Team name cannot be empty".into()));
        }
        if let Some(other) = self
            .groups
            .iter()
            .find(|g| g.name != group && g.contains(team))
        {
            return Err(TournamentError::Validation(format!(
                "Team '{}' is already in group {}",
                team, other.name
            )));
        }
        self.group_mut(group)?.add_team(team);
        Ok(())
    }

    /// Record a group match result (GroupStage only).
    pub fn record_match(
        &mut self,
        group: &str,
        team_1: &str,
        goals_1: u32,
        team_2: &str,
        goals_2: u32,
    ) -> Result<(), TournamentError> {
        self.ensure_group_stage()?;
        self.group_mut(group)?
            .record_match(team_1, goals_1, team_2, goals_2)
    }

    /// Ranked standings of one group.
    pub fn standings(&self, group: &str) -> Result<Vec<TeamRecord>, TournamentError> {
        self.group(group)
            .map(GroupTable::standings)
            .ok_or_else(|| TournamentError::GroupNotFound(group.to_string()))
    }

    /// The champion, once the final has been played.
    pub fn champion(&self) -> Option<&str> {
        self.knockout.as_ref().and_then(Knockout::champion)
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}
