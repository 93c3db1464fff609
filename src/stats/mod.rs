//! Team stats and live score module
//!
//! Team performance stats and live game states are produced outside this
//! crate (an external process or a saved snapshot) and injected through the
//! [`StatsProvider`] trait.

mod command;
mod file;
mod types;

pub use command::CommandStatsProvider;
pub use file::SnapshotFileProvider;
pub use types::{game_key, GameStatus, LiveGameState, StatsError, StatsSnapshot, TeamStats};

use crate::config::StatsConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for stats provider implementations
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch team stats and live game states for one analysis run
    async fn fetch(&self) -> Result<StatsSnapshot, StatsError>;
}

/// Build the provider selected by configuration: a snapshot file when one
/// is configured, otherwise the external stats program.
pub fn provider_from_config(config: &StatsConfig) -> Box<dyn StatsProvider> {
    match &config.snapshot_path {
        Some(path) => Box::new(SnapshotFileProvider::new(path)),
        None => Box::new(CommandStatsProvider::new(
            config.program.clone(),
            config.args.clone(),
            Duration::from_secs(config.timeout_secs),
        )),
    }
}
