//! Stats provider backed by a saved snapshot file

use super::{StatsError, StatsProvider, StatsSnapshot};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads a stats document previously written by the stats program
pub struct SnapshotFileProvider {
    path: PathBuf,
}

impl SnapshotFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl StatsProvider for SnapshotFileProvider {
    async fn fetch(&self) -> Result<StatsSnapshot, StatsError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let snapshot = StatsSnapshot::from_json(&bytes)?;
        tracing::info!(
            path = %self.path.display(),
            teams = snapshot.stats.len(),
            live_games = snapshot.live_scores.len(),
            "Loaded stats snapshot"
        );
        Ok(snapshot)
    }
}
