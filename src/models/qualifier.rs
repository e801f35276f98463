//! QualifierSet: the teams that advance from the group stage.

use serde::{Deserialize, Serialize};

/// Top two of one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupQualifiers {
    pub group: String,
    pub winner: String,
    pub runner_up: String,
}

/// A third-placed team that made the cut, with the group it came from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ThirdPlaced {
    pub group: String,
    pub team: String,
}

/// Direct qualifiers per group plus the best third-placed teams, best first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct QualifierSet {
    pub groups: Vec<GroupQualifiers>,
    pub third_placed: Vec<ThirdPlaced>,
}

impl QualifierSet {
    pub fn group(&self, name: &str) -> Option<&GroupQualifiers> {
        self.groups.iter().find(|g| g.group == name)
    }

    /// Every qualifying team name: group winners and runners-up first, then third-placed teams.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| [g.winner.as_str(), g.runner_up.as_str()])
            .chain(self.third_placed.iter().map(|t| t.team.as_str()))
    }

    pub fn len(&self) -> usize {
        self.groups.len() * 2 + self.third_placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
