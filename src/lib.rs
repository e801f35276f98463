//! Football tournament web app: library with models and business logic.
//!
//! Group standings, qualification of the best third-placed teams, and a single-elimination
//! bracket advanced round by round to a champion. The engine is plain data in, plain data out;
//! [`export`] is the only module that reads or writes (CSV, through caller-supplied streams).

pub mod export;
pub mod logic;
pub mod models;

pub use logic::{
    assign, qualifiers, qualifiers_with_thirds, rank_third_placed, record_knockout_results,
    record_round_results, start_knockout, THIRD_PLACE_QUALIFIERS,
};
pub use models::{
    compare_standing, BracketNode, BracketTemplate, GroupQualifiers, GroupTable, Knockout,
    KnockoutState, QualifierSet, Round, Slot, TeamRecord, ThirdPlaced, Tournament,
    TournamentError, TournamentId, TournamentPhase, POINTS_FOR_DRAW, POINTS_FOR_WIN,
};
