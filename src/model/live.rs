//! Live win probability from score and clock, plus the comeback gate

use crate::config::{ComebackThreshold, LiveConfig};

/// Score/clock win probability model
#[derive(Debug, Clone)]
pub struct LiveWinModel {
    game_minutes: f64,
    lead_factor: f64,
    min_prob: f64,
    max_prob: f64,
    gate_leaders: bool,
    thresholds: Vec<ComebackThreshold>,
}

impl LiveWinModel {
    /// Create a live model from configuration
    pub fn new(config: &LiveConfig) -> Self {
        Self {
            game_minutes: config.game_minutes(),
            lead_factor: config.lead_factor,
            min_prob: config.min_prob,
            max_prob: config.max_prob,
            gate_leaders: config.gate_leaders,
            thresholds: config.comeback_thresholds.clone(),
        }
    }

    /// Win probability for a team leading by `score_diff` (negative when
    /// trailing) with `minutes_remaining` left.
    ///
    /// A lead counts for more as the clock runs down. Before tip-off, with
    /// more than a full game left, significance goes negative and a lead
    /// lowers the probability.
    pub fn win_probability(&self, score_diff: i32, minutes_remaining: f64) -> f64 {
        if score_diff == 0 {
            return 0.5;
        }

        let significance = (self.game_minutes - minutes_remaining) / self.game_minutes;
        let prob = 0.5 + (f64::from(score_diff) * self.lead_factor * significance);

        prob.clamp(self.min_prob, self.max_prob)
    }

    /// Whether a gap of `score_diff` points can still plausibly swing with
    /// `minutes_remaining` left. Only the size of the gap matters.
    pub fn comeback_viable(&self, score_diff: i32, minutes_remaining: f64) -> bool {
        let gap = f64::from(score_diff).abs();
        !self
            .thresholds
            .iter()
            .any(|t| gap > t.deficit && minutes_remaining < t.minutes)
    }

    /// Gate for listing a bet on a team with the given differential.
    ///
    /// Never changes the probability, only whether the bet is listed.
    pub fn bet_viable(&self, score_diff: i32, minutes_remaining: f64) -> bool {
        if score_diff >= 0 && !self.gate_leaders {
            return true;
        }
        self.comeback_viable(score_diff, minutes_remaining)
    }
}

impl Default for LiveWinModel {
    fn default() -> Self {
        Self::new(&LiveConfig::default())
    }
}

/// Live win probability under the default 48-minute model
pub fn live_win_probability(score_diff: i32, minutes_remaining: f64) -> f64 {
    LiveWinModel::default().win_probability(score_diff, minutes_remaining)
}

/// Comeback gate under the default threshold curve
pub fn comeback_viable(score_diff: i32, minutes_remaining: f64) -> bool {
    LiveWinModel::default().comeback_viable(score_diff, minutes_remaining)
}
