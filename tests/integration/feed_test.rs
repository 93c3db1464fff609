//! Integration tests for the odds feed module

use courtside_value::config::OddsConfig;
use courtside_value::feed::{FeedError, OddsApiClient, OddsSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response and hand back the request line
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let n = socket.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request.lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{}/v4/sports", addr), server)
}

fn config(base_url: String) -> OddsConfig {
    OddsConfig {
        base_url,
        ..OddsConfig::default()
    }
}

#[tokio::test]
async fn test_fetch_odds() {
    let body = r#"[{
        "id": "abc",
        "sport_key": "basketball_nba",
        "sport_title": "NBA",
        "commence_time": "2024-01-15T00:10:00Z",
        "home_team": "Boston Celtics",
        "away_team": "Detroit Pistons",
        "bookmakers": [{"key": "betmgm", "title": "BetMGM", "markets": [
            {"key": "h2h", "outcomes": [
                {"name": "Boston Celtics", "price": -1000},
                {"name": "Detroit Pistons", "price": 650}
            ]}
        ]}]
    }]"#;
    let (base_url, server) = serve_once("200 OK", body).await;

    let client = OddsApiClient::new(config(base_url), "secret").unwrap();
    let games = client.fetch_odds("basketball_nba").await.unwrap();
    let request_line = server.await.unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].live_key(), "Detroit Pistons vs Boston Celtics");
    assert!(request_line.starts_with("GET /v4/sports/basketball_nba/odds?"));
    assert!(request_line.contains("apiKey=secret"));
    assert!(request_line.contains("oddsFormat=american"));
    assert!(request_line.contains("regions=us"));
}

#[tokio::test]
async fn test_fetch_sports() {
    let body = r#"[{"key": "basketball_nba", "group": "Basketball", "title": "NBA",
        "description": "US Basketball", "active": true, "has_outrights": false}]"#;
    let (base_url, server) = serve_once("200 OK", body).await;

    let client = OddsApiClient::new(config(base_url), "secret").unwrap();
    let sports = client.fetch_sports().await.unwrap();
    server.await.unwrap();

    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].title, "NBA");
}

#[tokio::test]
async fn test_error_status_is_odds_fetch_failure() {
    let (base_url, server) =
        serve_once("401 Unauthorized", r#"{"message": "API key is not valid"}"#).await;

    let client = OddsApiClient::new(config(base_url), "bad").unwrap();
    let result = client.fetch_odds("basketball_nba").await;
    server.await.unwrap();

    match result {
        Err(FeedError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("not valid"));
        }
        other => panic!("expected status error, got {:?}", other.map(|g| g.len())),
    }
}

#[tokio::test]
async fn test_unreachable_host() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OddsApiClient::new(config(format!("http://{}/v4/sports", addr)), "k").unwrap();
    let result = client.fetch_sports().await;
    assert!(matches!(result, Err(FeedError::OddsFetchFailed(_))));
}
