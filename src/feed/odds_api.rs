//! The Odds API client
//!
//! `GET {base}` lists sports, `GET {base}/{sport}/odds` returns games with
//! per-bookmaker markets priced in American odds.

use super::{FeedError, Game, OddsSource, Sport};
use crate::config::OddsConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for The Odds API v4
pub struct OddsApiClient {
    config: OddsConfig,
    api_key: String,
    client: Client,
}

impl OddsApiClient {
    /// Create a new client
    pub fn new(config: OddsConfig, api_key: impl Into<String>) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            api_key: api_key.into(),
            client,
        })
    }

    fn sports_url(&self) -> String {
        self.config.base_url.trim_end_matches('/').to_string()
    }

    fn odds_url(&self, sport: &str) -> String {
        format!("{}/{}/odds", self.sports_url(), sport)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FeedError> {
        let response = self
            .client
            .get(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status { status, body });
        }

        if let Some(remaining) = response.headers().get("x-requests-remaining") {
            tracing::debug!(remaining = ?remaining, "Odds API quota");
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch_sports(&self) -> Result<Vec<Sport>, FeedError> {
        let url = self.sports_url();
        tracing::debug!(url = %url, "Fetching sports list");

        let sports: Vec<Sport> = self.get_json(&url, &[]).await?;
        tracing::info!(sports = sports.len(), "Fetched sports list");
        Ok(sports)
    }

    async fn fetch_odds(&self, sport: &str) -> Result<Vec<Game>, FeedError> {
        let url = self.odds_url(sport);
        tracing::debug!(url = %url, "Fetching odds");

        let games: Vec<Game> = self
            .get_json(
                &url,
                &[
                    ("regions", self.config.regions.as_str()),
                    ("markets", self.config.markets.as_str()),
                    ("oddsFormat", self.config.odds_format.as_str()),
                ],
            )
            .await?;

        tracing::info!(sport = sport, games = games.len(), "Fetched odds");
        Ok(games)
    }
}
