//! Odds feed module
//!
//! Sports lists and moneyline/spread odds from The Odds API, or from a
//! saved odds file for offline runs.

mod file;
mod odds_api;
mod types;

pub use file::OddsFile;
pub use odds_api::OddsApiClient;
pub use types::{Bookmaker, FeedError, Game, Market, Outcome, Sport};

use crate::config::OddsConfig;
use async_trait::async_trait;

/// Trait for odds source implementations
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// List sports the source has odds for
    async fn fetch_sports(&self) -> Result<Vec<Sport>, FeedError>;
    /// Fetch games with bookmaker quotes for a sport
    async fn fetch_odds(&self, sport: &str) -> Result<Vec<Game>, FeedError>;
}

/// Resolve the odds API key.
///
/// The configured environment variable wins; otherwise the key file is
/// read and trimmed. An empty key is an error.
pub fn load_api_key(config: &OddsConfig) -> Result<String, FeedError> {
    if let Ok(key) = std::env::var(&config.api_key_env) {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    let path = &config.api_key_file;
    let contents = std::fs::read_to_string(path).map_err(|source| FeedError::ApiKeyRead {
        path: path.clone(),
        source,
    })?;

    let key = contents.trim();
    if key.is_empty() {
        return Err(FeedError::MissingApiKey {
            env: config.api_key_env.clone(),
            path: path.clone(),
        });
    }
    Ok(key.to_string())
}
