//! Knockout progression: record a round's scores, advance winners, crown the champion.

use crate::models::{
    BracketNode, Knockout, KnockoutState, Tournament, TournamentError, TournamentPhase,
};

/// Record the current round's results, `(team_1 goals, team_2 goals)` per node in node order.
///
/// Every score must be decisive. All results are validated before anything changes, so a
/// rejected call leaves the knockout exactly as it was. When the round is complete the winners
/// are paired consecutively (0 v 1, 2 v 3, ...) into the next round; after the final the state
/// becomes `Complete` and the winner is champion.
pub fn record_round_results(
    knockout: &mut Knockout,
    results: &[(u32, u32)],
) -> Result<(), TournamentError> {
    let round = match knockout.current_round() {
        Some(round) if !knockout.is_complete() => round,
        _ => return Err(TournamentError::InvalidState),
    };
    if results.len() != knockout.nodes.len() {
        return Err(TournamentError::ShapeMismatch {
            expected: knockout.nodes.len(),
            got: results.len(),
        });
    }
    if let Some(node) = results.iter().position(|(g1, g2)| g1 == g2) {
        return Err(TournamentError::NoWinner { node });
    }

    for (node, &(g1, g2)) in knockout.nodes.iter_mut().zip(results) {
        let winner = if g1 > g2 { &node.team_1 } else { &node.team_2 };
        node.winner = Some(winner.clone());
        node.score = Some((g1, g2));
        log::debug!("{}: {} {}-{} {}", round, node.team_1, g1, g2, node.team_2);
    }

    let played = std::mem::take(&mut knockout.nodes);
    let winners: Vec<String> = played.iter().filter_map(|n| n.winner.clone()).collect();
    knockout.completed_rounds.push(played);

    match round.next() {
        Some(next) => {
            knockout.nodes = winners
                .chunks_exact(2)
                .map(|pair| BracketNode::new(pair[0].clone(), pair[1].clone(), next))
                .collect();
            knockout.state = next.into();
            log::info!("{} complete, {} up next", round, next);
        }
        None => {
            knockout.champion = winners.into_iter().next();
            knockout.state = KnockoutState::Complete;
            log::info!(
                "Tournament complete, champion: {}",
                knockout.champion.as_deref().unwrap_or_default()
            );
        }
    }
    Ok(())
}

/// Record knockout results on a tournament (Knockout phase only). Moves to Completed after the final.
pub fn record_knockout_results(
    tournament: &mut Tournament,
    results: &[(u32, u32)],
) -> Result<(), TournamentError> {
    if tournament.phase != TournamentPhase::Knockout {
        return Err(TournamentError::InvalidState);
    }
    let knockout = tournament
        .knockout
        .as_mut()
        .ok_or(TournamentError::InvalidState)?;
    record_round_results(knockout, results)?;
    if knockout.is_complete() {
        tournament.phase = TournamentPhase::Completed;
    }
    Ok(())
}
