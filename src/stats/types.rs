//! Stats and live game types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Most recent results kept per team
pub const RECENT_GAMES: usize = 10;

/// Season aggregates for one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Season win rate (0-1)
    pub win_rate: f64,
    pub avg_points_for: f64,
    pub avg_points_against: f64,
    /// Recent results, most recent first, `true` for a win
    #[serde(default)]
    pub last_ten_games: Vec<bool>,
}

impl TeamStats {
    /// Average points scored minus average points allowed
    pub fn net_rating(&self) -> f64 {
        self.avg_points_for - self.avg_points_against
    }
}

/// Game status codes as reported by the live scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Not started (1)
    Scheduled,
    /// In progress (2)
    InProgress,
    /// Finished (3)
    Final,
    /// Any other code
    Other(u8),
}

impl From<u8> for GameStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => GameStatus::Scheduled,
            2 => GameStatus::InProgress,
            3 => GameStatus::Final,
            other => GameStatus::Other(other),
        }
    }
}

/// Snapshot of a game on the live scoreboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveGameState {
    /// 1-4 for regulation quarters, above 4 for overtime
    pub period: u32,
    /// Time left in the period, "MM:SS"
    pub clock: String,
    pub home_score: i32,
    pub away_score: i32,
    pub home_team: String,
    pub away_team: String,
    /// Raw status code, see [`GameStatus`]
    pub status: u8,
}

impl LiveGameState {
    /// Decoded status
    pub fn game_status(&self) -> GameStatus {
        GameStatus::from(self.status)
    }

    pub fn is_in_progress(&self) -> bool {
        self.game_status() == GameStatus::InProgress
    }

    pub fn is_finished(&self) -> bool {
        self.game_status() == GameStatus::Final
    }

    /// Home score minus away score
    pub fn home_lead(&self) -> i32 {
        self.home_score - self.away_score
    }
}

/// Live score key for a matchup: "<away> vs <home>"
pub fn game_key(away_team: &str, home_team: &str) -> String {
    format!("{} vs {}", away_team, home_team)
}

/// Everything a stats provider returns for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Team display name to season stats
    #[serde(default)]
    pub stats: BTreeMap<String, TeamStats>,
    /// Game key to live state; a missing entry means the game is not live
    #[serde(default)]
    pub live_scores: BTreeMap<String, LiveGameState>,
}

impl StatsSnapshot {
    /// Decode a stats document.
    ///
    /// Recent-result records are cut to the most recent ten games. A
    /// document without any team stats is reported as unavailable.
    pub fn from_json(bytes: &[u8]) -> Result<Self, StatsError> {
        let mut snapshot: StatsSnapshot = serde_json::from_slice(bytes)?;

        if snapshot.stats.is_empty() {
            return Err(StatsError::Unavailable);
        }

        for (team, stats) in snapshot.stats.iter_mut() {
            if stats.last_ten_games.len() > RECENT_GAMES {
                tracing::debug!(
                    team = %team,
                    games = stats.last_ten_games.len(),
                    "Truncating recent results"
                );
                stats.last_ten_games.truncate(RECENT_GAMES);
            }
        }

        Ok(snapshot)
    }

    /// Number of games currently in progress
    pub fn live_game_count(&self) -> usize {
        self.live_scores
            .values()
            .filter(|g| g.is_in_progress())
            .count()
    }
}

/// Stats retrieval errors
#[derive(Debug, Error)]
pub enum StatsError {
    /// Provider produced no team stats
    #[error("Team stats unavailable")]
    Unavailable,
    /// Stats program could not be started
    #[error("Failed to start stats program {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// Stats program exited unsuccessfully
    #[error("Stats program failed ({status}): {stderr}")]
    ProcessFailed { status: String, stderr: String },
    /// Stats program did not finish in time
    #[error("Stats program timed out after {0:?}")]
    Timeout(Duration),
    /// Stats document could not be decoded
    #[error("Failed to parse stats document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Snapshot file could not be read
    #[error("Failed to read stats snapshot: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "stats": {
            "Boston Celtics": {
                "win_rate": 0.78,
                "avg_points_for": 120.6,
                "avg_points_against": 109.2,
                "last_ten_games": [true, true, true, true, true, true, true, false, false, false]
            },
            "Detroit Pistons": {
                "win_rate": 0.17,
                "avg_points_for": 109.9,
                "avg_points_against": 119.0
            }
        },
        "live_scores": {
            "Detroit Pistons vs Boston Celtics": {
                "period": 3,
                "clock": "4:12",
                "home_score": 80,
                "away_score": 71,
                "home_team": "Boston Celtics",
                "away_team": "Detroit Pistons",
                "status": 2
            }
        }
    }"#;

    #[test]
    fn test_decode_document() {
        let snapshot = StatsSnapshot::from_json(DOCUMENT.as_bytes()).unwrap();
        assert_eq!(snapshot.stats.len(), 2);
        assert!(snapshot.stats["Detroit Pistons"].last_ten_games.is_empty());

        let live = &snapshot.live_scores["Detroit Pistons vs Boston Celtics"];
        assert!(live.is_in_progress());
        assert_eq!(live.home_lead(), 9);
        assert_eq!(snapshot.live_game_count(), 1);
    }

    #[test]
    fn test_empty_stats_is_unavailable() {
        let result = StatsSnapshot::from_json(br#"{"stats": {}, "live_scores": {}}"#);
        assert!(matches!(result, Err(StatsError::Unavailable)));
    }

    #[test]
    fn test_bad_document_is_parse_error() {
        let result = StatsSnapshot::from_json(b"Traceback (most recent call last):");
        assert!(matches!(result, Err(StatsError::Parse(_))));
    }

    #[test]
    fn test_long_record_is_truncated() {
        let doc = r#"{"stats": {"A": {
            "win_rate": 0.5, "avg_points_for": 100, "avg_points_against": 100,
            "last_ten_games": [true, true, true, true, true, true, true, true, true, true, false, false]
        }}}"#;
        let snapshot = StatsSnapshot::from_json(doc.as_bytes()).unwrap();
        assert_eq!(snapshot.stats["A"].last_ten_games, vec![true; 10]);
    }

    #[test]
    fn test_game_status_codes() {
        assert_eq!(GameStatus::from(1), GameStatus::Scheduled);
        assert_eq!(GameStatus::from(2), GameStatus::InProgress);
        assert_eq!(GameStatus::from(3), GameStatus::Final);
        assert_eq!(GameStatus::from(0), GameStatus::Other(0));
    }

    #[test]
    fn test_game_key_is_away_first() {
        assert_eq!(
            game_key("Detroit Pistons", "Boston Celtics"),
            "Detroit Pistons vs Boston Celtics"
        );
    }

    #[test]
    fn test_net_rating() {
        let stats = TeamStats {
            win_rate: 0.6,
            avg_points_for: 112.5,
            avg_points_against: 108.0,
            last_ten_games: vec![],
        };
        assert_eq!(stats.net_rating(), 4.5);
    }
}
