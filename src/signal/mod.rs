//! Value signal module
//!
//! Scores every moneyline outcome against its implied probability and
//! ranks the positive-value bets by confidence.

mod ranking;
mod scorer;
mod types;

pub use ranking::{find_value_bets, rank_value_bets};
pub use scorer::{confidence_score, ValueScorer};
pub use types::{Recommendation, ValueBet};
