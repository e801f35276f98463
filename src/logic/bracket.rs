//! Bracket assignment: seat the qualifiers into the first-round pairing template.

use crate::models::{BracketNode, BracketTemplate, QualifierSet, Slot, TournamentError};
use std::collections::HashSet;

/// Substitute qualifier names into `template`, returning the first-round nodes in template order.
///
/// The qualifier set must hold exactly as many distinct teams as the template has slots.
pub fn assign(
    template: &BracketTemplate,
    qualifiers: &QualifierSet,
) -> Result<Vec<BracketNode>, TournamentError> {
    let expected = template.qualifier_count();
    if qualifiers.len() != expected {
        return Err(TournamentError::Configuration(format!(
            "bracket needs {} qualifiers, got {}",
            expected,
            qualifiers.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = qualifiers.names().find(|name| !seen.insert(*name)) {
        return Err(TournamentError::Configuration(format!(
            "team '{}' qualified more than once",
            dup
        )));
    }

    let round = template.first_round();
    template
        .pairings()
        .iter()
        .map(|(a, b)| {
            Ok(BracketNode::new(
                resolve(a, qualifiers)?,
                resolve(b, qualifiers)?,
                round,
            ))
        })
        .collect()
}

fn resolve<'q>(slot: &Slot, qualifiers: &'q QualifierSet) -> Result<&'q str, TournamentError> {
    let team = match slot {
        Slot::GroupWinner(g) => qualifiers.group(g).map(|q| q.winner.as_str()),
        Slot::RunnerUp(g) => qualifiers.group(g).map(|q| q.runner_up.as_str()),
        Slot::ThirdPlace(rank) => qualifiers.third_placed.get(*rank).map(|t| t.team.as_str()),
    };
    team.ok_or_else(|| {
        TournamentError::Configuration(format!("no qualifier for bracket slot {}", slot))
    })
}
