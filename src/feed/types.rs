//! Odds feed types

use crate::stats::game_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A sport listed by the odds API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub key: String,
    #[serde(default)]
    pub group: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub has_outrights: bool,
}

/// One side of a market and its American price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
    /// Handicap for spread markets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
}

/// A bookmaker market ("h2h" is the moneyline)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// Quotes from a single bookmaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmaker {
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// A matchup with its bookmaker quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub sport_key: String,
    #[serde(default)]
    pub sport_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commence_time: Option<DateTime<Utc>>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

impl Game {
    /// Key of this game in the live score map
    pub fn live_key(&self) -> String {
        game_key(&self.away_team, &self.home_team)
    }

    /// Quotes of one bookmaker, if it priced this game
    pub fn bookmaker(&self, key: &str) -> Option<&Bookmaker> {
        self.bookmakers.iter().find(|b| b.key == key)
    }

    /// Outcomes of `market` from `bookmaker`; other books and markets are
    /// skipped
    pub fn outcomes<'a>(
        &'a self,
        bookmaker: &'a str,
        market: &'a str,
    ) -> impl Iterator<Item = &'a Outcome> + 'a {
        self.bookmakers
            .iter()
            .filter(move |b| b.key == bookmaker)
            .flat_map(|b| b.markets.iter())
            .filter(move |m| m.key == market)
            .flat_map(|m| m.outcomes.iter())
    }
}

/// Odds feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// No key in the environment and an empty key file
    #[error("Odds API key missing: set {env} or put the key in {}", .path.display())]
    MissingApiKey { env: String, path: PathBuf },
    /// Key file could not be read
    #[error("Failed to read API key from {}: {source}", .path.display())]
    ApiKeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Transport-level failure talking to the odds API
    #[error("Odds fetch failed: {0}")]
    OddsFetchFailed(#[from] reqwest::Error),
    /// Odds API answered with an error status
    #[error("Odds API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Response or file was not the expected JSON
    #[error("Failed to decode odds payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// Odds file could not be read
    #[error("Failed to read odds file: {0}")]
    Io(#[from] std::io::Error),
}
