//! Integration tests for stats providers

use courtside_value::config::StatsConfig;
use courtside_value::stats::{provider_from_config, CommandStatsProvider, StatsError, StatsProvider};
use std::io::Write;
use std::time::Duration;
use tokio_test::assert_ok;

const DOCUMENT: &str = r#"{"stats": {"Denver Nuggets": {"win_rate": 0.69, "avg_points_for": 114.9, "avg_points_against": 109.6, "last_ten_games": [true, true, false, true, true, true, false, true, true, true]}}, "live_scores": {}}"#;

fn sh(script: &str, timeout: Duration) -> CommandStatsProvider {
    CommandStatsProvider::new("sh", vec!["-c".to_string(), script.to_string()], timeout)
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_provider_reads_stdout() {
    let script = format!("echo 'warming up' >&2; printf '%s' '{}'", DOCUMENT);
    let snapshot = assert_ok!(sh(&script, Duration::from_secs(5)).fetch().await);
    assert_eq!(snapshot.stats.len(), 1);
    assert!(snapshot.stats.contains_key("Denver Nuggets"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_failure() {
    let result = sh("echo 'no module named nba_api' >&2; exit 3", Duration::from_secs(5))
        .fetch()
        .await;
    match result {
        Err(StatsError::ProcessFailed { stderr, .. }) => {
            assert!(stderr.contains("nba_api"));
        }
        other => panic!("expected process failure, got {:?}", other.map(|s| s.stats.len())),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_command_timeout() {
    let result = sh("sleep 5", Duration::from_millis(100)).fetch().await;
    assert!(matches!(result, Err(StatsError::Timeout(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn test_empty_stats_unavailable() {
    let result = sh(r#"echo '{"stats": {}, "live_scores": {}}'"#, Duration::from_secs(5))
        .fetch()
        .await;
    assert!(matches!(result, Err(StatsError::Unavailable)));
}

#[tokio::test]
async fn test_missing_program() {
    let provider = CommandStatsProvider::new(
        "courtside-no-such-program",
        vec![],
        Duration::from_secs(5),
    );
    let result = provider.fetch().await;
    assert!(matches!(result, Err(StatsError::Spawn { .. })));
}

#[tokio::test]
async fn test_config_selects_snapshot_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", DOCUMENT).unwrap();

    let config = StatsConfig {
        program: "courtside-no-such-program".to_string(),
        snapshot_path: Some(file.path().to_path_buf()),
        ..StatsConfig::default()
    };
    let snapshot = assert_ok!(provider_from_config(&config).fetch().await);
    assert!((snapshot.stats["Denver Nuggets"].net_rating() - 5.3).abs() < 1e-9);
}
