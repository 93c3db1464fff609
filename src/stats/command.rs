//! Stats provider backed by an external program
//!
//! The program prints a JSON document with `stats` and `live_scores` maps
//! on stdout; diagnostics on stderr are ignored unless it fails.

use super::{StatsError, StatsProvider, StatsSnapshot};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// Runs a stats program and decodes its output
pub struct CommandStatsProvider {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandStatsProvider {
    /// Create a provider for `program args...`
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }
}

#[async_trait]
impl StatsProvider for CommandStatsProvider {
    async fn fetch(&self) -> Result<StatsSnapshot, StatsError> {
        tracing::debug!(program = %self.program, args = ?self.args, "Running stats program");

        let run = Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| StatsError::Timeout(self.timeout))?
            .map_err(|source| StatsError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(StatsError::ProcessFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let snapshot = StatsSnapshot::from_json(&output.stdout)?;
        tracing::info!(
            teams = snapshot.stats.len(),
            live_games = snapshot.live_scores.len(),
            "Loaded stats from program"
        );
        Ok(snapshot)
    }
}
