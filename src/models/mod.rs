//! Data structures for the football tournament: team records, groups, bracket, tournament state.

mod bracket;
mod group;
mod knockout;
mod qualifier;
mod team;
mod tournament;

pub use bracket::{BracketNode, BracketTemplate, Round, Slot};
pub use group::{compare_standing, GroupTable};
pub use knockout::{Knockout, KnockoutState};
pub use qualifier::{GroupQualifiers, QualifierSet, ThirdPlaced};
pub use team::{TeamRecord, POINTS_FOR_DRAW, POINTS_FOR_WIN};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentPhase};
