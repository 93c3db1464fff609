//! Value bet types

use crate::config::RankingConfig;
use serde::{Deserialize, Serialize};

/// A moneyline outcome the model prices above the bookmaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueBet {
    /// Game key, "<away> vs <home>"
    pub game: String,
    /// Team to back
    pub team: String,
    /// Quoted American odds
    pub odds: f64,
    /// Break-even probability of the quote
    pub implied_prob: f64,
    /// Model probability (historical, blended with live when in progress)
    pub estimated_prob: f64,
    /// Estimated minus implied probability
    pub value: f64,
    /// Points for minus points against
    pub net_rating: f64,
    /// Confidence score in [0, 1]
    pub confidence: f64,
}

impl ValueBet {
    /// Create a new value bet
    pub fn new(
        game: String,
        team: String,
        odds: f64,
        implied_prob: f64,
        estimated_prob: f64,
        net_rating: f64,
        confidence: f64,
    ) -> Self {
        Self {
            game,
            team,
            odds,
            implied_prob,
            estimated_prob,
            value: estimated_prob - implied_prob,
            net_rating,
            confidence,
        }
    }

    /// Recommendation tier for this bet
    pub fn recommendation(&self, config: &RankingConfig) -> Recommendation {
        Recommendation::classify(self.confidence, config)
    }

    /// Whether the edge is large enough to call out
    pub fn is_large_edge(&self, config: &RankingConfig) -> bool {
        self.value > config.large_edge_threshold
    }
}

/// Recommendation tier derived from confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Strong,
    Moderate,
    Speculative,
}

impl Recommendation {
    /// Tier for a confidence score; both thresholds are exclusive
    pub fn classify(confidence: f64, config: &RankingConfig) -> Self {
        if confidence > config.strong_threshold {
            Recommendation::Strong
        } else if confidence > config.moderate_threshold {
            Recommendation::Moderate
        } else {
            Recommendation::Speculative
        }
    }

    /// One-line advice for the report
    pub fn advice(&self) -> &'static str {
        match self {
            Recommendation::Strong => "Strong Value Bet - High confidence in favorable odds",
            Recommendation::Moderate => "Moderate Value Bet - Decent odds but moderate risk",
            Recommendation::Speculative => "Speculative Bet - Favorable odds but high risk",
        }
    }
}
