//! Knockout stage state: current round's nodes, completed rounds, champion.

use crate::models::bracket::{BracketNode, Round};
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};

/// Where the knockout stage currently stands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnockoutState {
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    Final,
    /// Final played; no further rounds.
    Complete,
}

impl From<Round> for KnockoutState {
    fn from(round: Round) -> Self {
        match round {
            Round::RoundOf16 => KnockoutState::RoundOf16,
            Round::QuarterFinals => KnockoutState::QuarterFinals,
            Round::SemiFinals => KnockoutState::SemiFinals,
            Round::Final => KnockoutState::Final,
        }
    }
}

/// Single-elimination bracket in progress.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Knockout {
    pub state: KnockoutState,
    /// Nodes of the round being played (empty once complete).
    pub nodes: Vec<BracketNode>,
    /// Rounds already played, oldest first, with winners and scores.
    pub completed_rounds: Vec<Vec<BracketNode>>,
    pub champion: Option<String>,
}

impl Knockout {
    /// Start a knockout from its first round. Needs 1, 2, 4 or 8 unplayed nodes of the matching round.
    pub fn new(nodes: Vec<BracketNode>) -> Result<Self, TournamentError> {
        let round = Round::for_node_count(nodes.len()).ok_or_else(|| {
            TournamentError::Configuration(format!(
                "a knockout round cannot have {} matches",
                nodes.len()
            ))
        })?;
        if nodes.iter().any(|n| n.round != round || n.is_decided()) {
            return Err(TournamentError::Configuration(format!(
                "first round nodes must be unplayed {} matches",
                round
            )));
        }
        Ok(Self {
            state: round.into(),
            nodes,
            completed_rounds: Vec::new(),
            champion: None,
        })
    }

    /// Round currently being played, `None` once complete.
    pub fn current_round(&self) -> Option<Round> {
        self.nodes.first().map(|n| n.round)
    }

    pub fn is_complete(&self) -> bool {
        self.state == KnockoutState::Complete
    }

    pub fn champion(&self) -> Option<&str> {
        self.champion.as_deref()
    }

    /// Every round so far, played ones first, then the current one.
    pub fn rounds(&self) -> impl Iterator<Item = &[BracketNode]> {
        self.completed_rounds
            .iter()
            .map(Vec::as_slice)
            .chain((!self.nodes.is_empty()).then_some(self.nodes.as_slice()))
    }
}
