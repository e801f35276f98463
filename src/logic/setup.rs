//! Knockout start: transition from GroupStage to Knockout.

use crate::logic::{assign, qualifiers_with_thirds};
use crate::models::{Knockout, Tournament, TournamentError, TournamentPhase};

/// Close the group stage: rank every group, pick the best third-placed teams the bracket
/// template asks for, and seat everyone into the first knockout round.
///
/// Nothing changes unless every step succeeds.
pub fn start_knockout(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.phase != TournamentPhase::GroupStage {
        return Err(TournamentError::InvalidState);
    }
    let qualifiers =
        qualifiers_with_thirds(&tournament.groups, tournament.template.third_place_count())?;
    let nodes = assign(&tournament.template, &qualifiers)?;
    let knockout = Knockout::new(nodes)?;

    log::info!(
        "Group stage closed: {} qualifiers, knockout starts with the {}",
        qualifiers.len(),
        tournament.template.first_round()
    );
    tournament.qualifiers = Some(qualifiers);
    tournament.knockout = Some(knockout);
    tournament.phase = TournamentPhase::Knockout;
    Ok(())
}
