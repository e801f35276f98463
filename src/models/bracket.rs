//! Knockout bracket: rounds, match nodes, and the fixed Round-of-16 pairing template.

use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Knockout round a node belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    Final,
}

impl Round {
    /// Round whose node list has `nodes` entries (8, 4, 2 or 1).
    pub fn for_node_count(nodes: usize) -> Option<Round> {
        match nodes {
            8 => Some(Round::RoundOf16),
            4 => Some(Round::QuarterFinals),
            2 => Some(Round::SemiFinals),
            1 => Some(Round::Final),
            _ => None,
        }
    }

    pub fn node_count(self) -> usize {
        match self {
            Round::RoundOf16 => 8,
            Round::QuarterFinals => 4,
            Round::SemiFinals => 2,
            Round::Final => 1,
        }
    }

    /// The following round, or `None` after the final.
    pub fn next(self) -> Option<Round> {
        match self {
            Round::RoundOf16 => Some(Round::QuarterFinals),
            Round::QuarterFinals => Some(Round::SemiFinals),
            Round::SemiFinals => Some(Round::Final),
            Round::Final => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Round::RoundOf16 => "Round of 16",
            Round::QuarterFinals => "Quarter-finals",
            Round::SemiFinals => "Semi-finals",
            Round::Final => "Final",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One side of a template pairing.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Winner of the named group.
    GroupWinner(String),
    /// Runner-up of the named group.
    RunnerUp(String),
    /// N-th best third-placed team (0-based, in ranked order). The team's group is not
    /// considered, so it may meet a side from its own group.
    ThirdPlace(usize),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::GroupWinner(g) => write!(f, "1{}", g),
            Slot::RunnerUp(g) => write!(f, "2{}", g),
            Slot::ThirdPlace(rank) => write!(f, "3rd #{}", rank + 1),
        }
    }
}

/// Ordered list of first-round pairings, supplied as configuration.
///
/// Pairings are listed in bracket order: winners of pairings 0 and 1 meet next, then 2 and 3, etc.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Slot, Slot)>", into = "Vec<(Slot, Slot)>")]
pub struct BracketTemplate {
    pairings: Vec<(Slot, Slot)>,
}

impl BracketTemplate {
    /// Build a template. Needs 1, 2, 4 or 8 pairings, no slot used twice, and third-place
    /// slots numbered `0..n` without gaps.
    pub fn new(pairings: Vec<(Slot, Slot)>) -> Result<Self, TournamentError> {
        if Round::for_node_count(pairings.len()).is_none() {
            return Err(TournamentError::Configuration(format!(
                "bracket template needs 1, 2, 4 or 8 pairings, got {}",
                pairings.len()
            )));
        }
        let mut seen = HashSet::new();
        for slot in pairings.iter().flat_map(|(a, b)| [a, b]) {
            if !seen.insert(slot) {
                return Err(TournamentError::Configuration(format!(
                    "slot {} appears twice in the bracket template",
                    slot
                )));
            }
        }
        let template = Self { pairings };
        let thirds = template.third_place_count();
        for slot in template.slots() {
            if let Slot::ThirdPlace(rank) = slot {
                if *rank >= thirds {
                    return Err(TournamentError::Configuration(format!(
                        "third-place slots must be numbered 0..{}, found {}",
                        thirds, rank
                    )));
                }
            }
        }
        Ok(template)
    }

    /// Euro 2024 Round of 16, in bracket order (matches 39, 37, 41, 42, 43, 44, 40, 38).
    ///
    /// Third-placed teams fill the four winner-v-third pairings by rank, not by the regulation's
    /// group-combination table, so e.g. B1 meets B3 when group B has the best third.
    pub fn euro_2024() -> Self {
        use Slot::*;
        let w = |g: &str| GroupWinner(g.to_string());
        let r = |g: &str| RunnerUp(g.to_string());
        Self {
            pairings: vec![
                (w("B"), ThirdPlace(0)),
                (w("A"), r("C")),
                (w("F"), ThirdPlace(1)),
                (r("D"), r("E")),
                (w("E"), ThirdPlace(2)),
                (w("D"), r("F")),
                (w("C"), ThirdPlace(3)),
                (r("A"), r("B")),
            ],
        }
    }

    pub fn pairings(&self) -> &[(Slot, Slot)] {
        &self.pairings
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.pairings.iter().flat_map(|(a, b)| [a, b])
    }

    /// Number of teams the template seats (always twice the pairing count).
    pub fn qualifier_count(&self) -> usize {
        self.pairings.len() * 2
    }

    pub fn third_place_count(&self) -> usize {
        self.slots()
            .filter(|s| matches!(s, Slot::ThirdPlace(_)))
            .count()
    }

    pub fn first_round(&self) -> Round {
        // Pairing count is checked on construction.
        Round::for_node_count(self.pairings.len()).unwrap_or(Round::Final)
    }
}

impl TryFrom<Vec<(Slot, Slot)>> for BracketTemplate {
    type Error = TournamentError;

    fn try_from(pairings: Vec<(Slot, Slot)>) -> Result<Self, Self::Error> {
        Self::new(pairings)
    }
}

impl From<BracketTemplate> for Vec<(Slot, Slot)> {
    fn from(template: BracketTemplate) -> Self {
        template.pairings
    }
}

impl Default for BracketTemplate {
    fn default() -> Self {
        Self::euro_2024()
    }
}

/// A single knockout match slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketNode {
    pub round: Round,
    pub team_1: String,
    pub team_2: String,
    /// None until played.
    pub winner: Option<String>,
    /// Decisive score (team 1 goals, team 2 goals) once played.
    pub score: Option<(u32, u32)>,
}

impl BracketNode {
    pub fn new(team_1: impl Into<String>, team_2: impl Into<String>, round: Round) -> Self {
        Self {
            round,
            team_1: team_1.into(),
            team_2: team_2.into(),
            winner: None,
            score: None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}
