//! Odds source backed by a saved odds response

use super::{FeedError, Game, OddsSource, Sport};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Reads games from a JSON file holding an odds API response
pub struct OddsFile {
    path: PathBuf,
}

impl OddsFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> Result<Vec<Game>, FeedError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl OddsSource for OddsFile {
    /// Sports are derived from the games in the file
    async fn fetch_sports(&self) -> Result<Vec<Sport>, FeedError> {
        let games = self.load().await?;
        let sports: BTreeMap<String, String> = games
            .into_iter()
            .map(|g| (g.sport_key, g.sport_title))
            .collect();

        Ok(sports
            .into_iter()
            .map(|(key, title)| Sport {
                key,
                group: String::new(),
                title,
                description: String::new(),
                active: true,
                has_outrights: false,
            })
            .collect())
    }

    async fn fetch_odds(&self, sport: &str) -> Result<Vec<Game>, FeedError> {
        let games: Vec<Game> = self
            .load()
            .await?
            .into_iter()
            .filter(|g| g.sport_key.is_empty() || g.sport_key == sport)
            .collect();

        tracing::info!(
            path = %self.path.display(),
            games = games.len(),
            "Loaded odds file"
        );
        Ok(games)
    }
}
