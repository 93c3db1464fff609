//! Value and confidence scoring

use super::ValueBet;
use crate::config::{Config, ConfidenceConfig};
use crate::feed::Game;
use crate::model::{
    implied_probability, is_quotable, BlendedModel, EstimateParams, GameClock, LiveSituation,
    LiveWinModel, ProbabilityModel, Venue,
};
use crate::stats::StatsSnapshot;
use crate::telemetry::{increment, CountMetric};

/// Confidence in a value bet, in [0, 1].
///
/// Edge and net rating are normalized, combined with recent form, clamped
/// and raised to `config.exponent` so top scores are harder to reach.
pub fn confidence_score(
    value: f64,
    net_rating: f64,
    recent_form: f64,
    config: &ConfidenceConfig,
) -> f64 {
    let normalized_value = (value * config.value_scale).clamp(0.0, 1.0);
    let normalized_net_rating = (net_rating + config.net_rating_offset) / config.net_rating_span;

    let combined = (normalized_value * config.value_weight)
        + (normalized_net_rating * config.net_rating_weight)
        + (recent_form * config.form_weight);

    combined.clamp(0.0, 1.0).powf(config.exponent)
}

/// Turns bookmaker quotes plus team stats into value bets
pub struct ValueScorer<M: ProbabilityModel> {
    model: M,
    clock: GameClock,
    live: LiveWinModel,
    confidence: ConfidenceConfig,
    bookmaker: String,
    market: String,
}

impl ValueScorer<BlendedModel> {
    /// Scorer using the blended historical/live model
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            BlendedModel::new(config.model.clone(), &config.live),
            config,
        )
    }
}

impl<M: ProbabilityModel> ValueScorer<M> {
    /// Create a new scorer around `model`
    pub fn new(model: M, config: &Config) -> Self {
        Self {
            model,
            clock: GameClock::new(&config.live),
            live: LiveWinModel::new(&config.live),
            confidence: config.confidence.clone(),
            bookmaker: config.odds.bookmaker.clone(),
            market: config.odds.market.clone(),
        }
    }

    /// Confidence with this scorer's weights
    pub fn confidence(&self, value: f64, net_rating: f64, recent_form: f64) -> f64 {
        confidence_score(value, net_rating, recent_form, &self.confidence)
    }

    /// Value bets for one game.
    ///
    /// Only the configured bookmaker and market are read, and only outcomes
    /// with known team stats are scored. Finished games yield nothing.
    pub fn score_game(&self, game: &Game, snapshot: &StatsSnapshot) -> Vec<ValueBet> {
        let key = game.live_key();
        let live_state = snapshot.live_scores.get(&key);

        if live_state.is_some_and(|s| s.is_finished()) {
            tracing::debug!(game = %key, "Skipping finished game");
            return Vec::new();
        }
        let in_progress = live_state.filter(|s| s.is_in_progress());

        let mut bets = Vec::new();
        for outcome in game.outcomes(&self.bookmaker, &self.market) {
            let Some(stats) = snapshot.stats.get(&outcome.name) else {
                continue;
            };
            if !is_quotable(outcome.price) {
                tracing::warn!(
                    game = %key,
                    team = %outcome.name,
                    price = outcome.price,
                    "Skipping unusable price"
                );
                continue;
            }

            let venue = if outcome.name == game.home_team {
                Venue::Home
            } else {
                Venue::Away
            };

            let live = in_progress.map(|state| {
                let score_diff = if outcome.name == game.away_team {
                    -state.home_lead()
                } else {
                    state.home_lead()
                };
                LiveSituation {
                    score_diff,
                    minutes_remaining: self.clock.minutes_remaining(state.period, &state.clock),
                }
            });

            let estimate = self.model.estimate(&EstimateParams { stats, venue, live });
            let implied_prob = implied_probability(outcome.price);
            let value = estimate.probability - implied_prob;
            let net_rating = stats.net_rating();
            let confidence = self.confidence(value, net_rating, estimate.recent_form);
            increment(CountMetric::OutcomesScored, 1);

            tracing::debug!(
                game = %key,
                team = %outcome.name,
                odds = outcome.price,
                implied_prob,
                estimated_prob = estimate.probability,
                value,
                confidence,
                "Scored outcome"
            );

            if value <= 0.0 {
                continue;
            }

            if let Some(situation) = live {
                if !self
                    .live
                    .bet_viable(situation.score_diff, situation.minutes_remaining)
                {
                    tracing::debug!(
                        game = %key,
                        team = %outcome.name,
                        score_diff = situation.score_diff,
                        minutes_remaining = situation.minutes_remaining,
                        "Gap too large for the time left"
                    );
                    continue;
                }
            }

            bets.push(ValueBet::new(
                key.clone(),
                outcome.name.clone(),
                outcome.price,
                implied_prob,
                estimate.probability,
                net_rating,
                confidence,
            ));
        }

        bets
    }

    /// Value bets for every game, in game order
    pub fn score_games(&self, games: &[Game], snapshot: &StatsSnapshot) -> Vec<ValueBet> {
        games
            .iter()
            .flat_map(|game| self.score_game(game, snapshot))
            .collect()
    }
}
