//! Win probability model module
//!
//! Estimates a team's chance of winning from season stats, recent form and,
//! once a game is under way, the live score and clock.

mod blend;
mod clock;
mod form;
mod live;
mod odds;

pub use blend::BlendedModel;
pub use clock::{time_remaining, GameClock};
pub use form::{recent_form, recent_form_or};
pub use live::{comeback_viable, live_win_probability, LiveWinModel};
pub use odds::{implied_probability, is_quotable};

use crate::stats::TeamStats;
use serde::{Deserialize, Serialize};

/// Which side of the matchup the evaluated team is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

/// Live game situation from the evaluated team's point of view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSituation {
    /// Team score minus opponent score
    pub score_diff: i32,
    /// Minutes of game time left
    pub minutes_remaining: f64,
}

/// Parameters for a win probability estimate
#[derive(Debug, Clone)]
pub struct EstimateParams<'a> {
    pub stats: &'a TeamStats,
    pub venue: Venue,
    /// Present only while the game is in progress
    pub live: Option<LiveSituation>,
}

/// Estimated win probability and the pieces it was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinEstimate {
    /// Share of recent games won
    pub recent_form: f64,
    /// Season/form estimate including home-court adjustment
    pub historical_prob: f64,
    /// Score/clock estimate, when the game is live
    pub live_prob: Option<f64>,
    /// Final blended probability
    pub probability: f64,
}

/// Trait for win probability model implementations
pub trait ProbabilityModel: Send + Sync {
    /// Estimate the evaluated team's win probability
    fn estimate(&self, params: &EstimateParams<'_>) -> WinEstimate;
}
