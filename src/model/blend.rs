//! Historical + live blended probability model

use super::{
    recent_form_or, EstimateParams, LiveWinModel, ProbabilityModel, Venue, WinEstimate,
};
use crate::config::{LiveConfig, ModelConfig};

/// Blends season win rate and recent form, adjusted for home court, with
/// the live score/clock estimate once a game is in progress.
#[derive(Debug, Clone)]
pub struct BlendedModel {
    config: ModelConfig,
    live: LiveWinModel,
}

impl BlendedModel {
    /// Create a new blended model
    pub fn new(config: ModelConfig, live: &LiveConfig) -> Self {
        Self {
            config,
            live: LiveWinModel::new(live),
        }
    }

    /// Pre-game probability from season and form
    pub fn historical_probability(&self, win_rate: f64, recent_form: f64, venue: Venue) -> f64 {
        let prob = win_rate * self.config.win_rate_weight + recent_form * self.config.form_weight;
        match venue {
            Venue::Home => prob + self.config.home_advantage,
            Venue::Away => prob - self.config.home_advantage,
        }
    }
}

impl Default for BlendedModel {
    fn default() -> Self {
        Self::new(ModelConfig::default(), &LiveConfig::default())
    }
}

impl ProbabilityModel for BlendedModel {
    fn estimate(&self, params: &EstimateParams<'_>) -> WinEstimate {
        let recent_form = recent_form_or(&params.stats.last_ten_games, self.config.neutral_form);
        let historical_prob =
            self.historical_probability(params.stats.win_rate, recent_form, params.venue);

        let live_prob = params
            .live
            .map(|s| self.live.win_probability(s.score_diff, s.minutes_remaining));

        let blended = match live_prob {
            Some(live_prob) => {
                historical_prob * self.config.live_historical_weight
                    + live_prob * self.config.live_weight
            }
            None => historical_prob,
        };

        WinEstimate {
            recent_form,
            historical_prob,
            live_prob,
            probability: blended.clamp(self.config.min_prob, self.config.max_prob),
        }
    }
}
