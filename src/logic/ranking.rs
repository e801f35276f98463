//! Group stage ranking: direct qualifiers per group and the best third-placed teams.

use crate::models::{
    compare_standing, GroupQualifiers, GroupTable, QualifierSet, TeamRecord, ThirdPlaced,
    TournamentError,
};

/// Third-placed teams that advance in a 24-team, 6-group tournament.
pub const THIRD_PLACE_QUALIFIERS: usize = 4;

/// Qualifiers with the standard four best third-placed teams.
pub fn qualifiers(groups: &[GroupTable]) -> Result<QualifierSet, TournamentError> {
    qualifiers_with_thirds(groups, THIRD_PLACE_QUALIFIERS)
}

/// Compute the qualifier set: top two of every group plus the best `thirds` third-placed teams.
///
/// Every group needs at least two teams. Groups of exactly two contribute no third-place candidate.
pub fn qualifiers_with_thirds(
    groups: &[GroupTable],
    thirds: usize,
) -> Result<QualifierSet, TournamentError> {
    let mut direct = Vec::with_capacity(groups.len());
    let mut candidates: Vec<(String, TeamRecord)> = Vec::new();

    for group in groups {
        let mut standings = group.standings().into_iter();
        let (winner, runner_up) = match (standings.next(), standings.next()) {
            (Some(w), Some(r)) => (w, r),
            _ => {
                return Err(TournamentError::InsufficientTeams {
                    group: group.name.clone(),
                })
            }
        };
        direct.push(GroupQualifiers {
            group: group.name.clone(),
            winner: winner.name,
            runner_up: runner_up.name,
        });
        if let Some(third) = standings.next() {
            candidates.push((group.name.clone(), third));
        }
    }

    let third_placed = rank_third_placed(candidates, thirds)?;
    log::debug!(
        "{} direct qualifiers, third-placed: {:?}",
        direct.len() * 2,
        third_placed.iter().map(|t| t.team.as_str()).collect::<Vec<_>>()
    );
    Ok(QualifierSet {
        groups: direct,
        third_placed,
    })
}

/// Rank third-placed candidates (group, record) with the standings order and keep the best `take`.
/// Ties keep the candidates' group order.
pub fn rank_third_placed(
    mut candidates: Vec<(String, TeamRecord)>,
    take: usize,
) -> Result<Vec<ThirdPlaced>, TournamentError> {
    if candidates.len() < take {
        return Err(TournamentError::InsufficientQualifiers {
            found: candidates.len(),
            required: take,
        });
    }
    candidates.sort_by(|(_, a), (_, b)| compare_standing(a, b));
    Ok(candidates
        .into_iter()
        .take(take)
        .map(|(group, record)| ThirdPlaced {
            group,
            team: record.name,
        })
        .collect())
}
