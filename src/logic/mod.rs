//! Tournament business logic: ranking, bracket assignment, knockout progression.

mod bracket;
mod knockout;
mod ranking;
mod setup;

pub use bracket::assign;
pub use knockout::{record_knockout_results, record_round_results};
pub use ranking::{qualifiers, qualifiers_with_thirds, rank_third_placed, THIRD_PLACE_QUALIFIERS};
pub use setup::start_knockout;
