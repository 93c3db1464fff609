//! End-to-end integration tests

use courtside_value::config::Config;
use courtside_value::feed::{Bookmaker, Game, Market, Outcome};
use courtside_value::model::{comeback_viable, implied_probability, time_remaining};
use courtside_value::signal::{confidence_score, find_value_bets, ValueScorer};
use courtside_value::stats::{LiveGameState, StatsSnapshot, TeamStats};

fn team(win_rate: f64, wins_of_ten: usize, points_for: f64, against: f64) -> TeamStats {
    let mut last_ten_games = vec![true; wins_of_ten];
    last_ten_games.resize(10, false);
    TeamStats {
        win_rate,
        avg_points_for: points_for,
        avg_points_against: against,
        last_ten_games,
    }
}

fn matchup(id: &str, home: &str, away: &str, home_price: f64, away_price: f64) -> Game {
    Game {
        id: id.to_string(),
        sport_key: "basketball_nba".to_string(),
        sport_title: "NBA".to_string(),
        commence_time: None,
        home_team: home.to_string(),
        away_team: away.to_string(),
        bookmakers: vec![
            Bookmaker {
                key: "draftkings".to_string(),
                title: "DraftKings".to_string(),
                markets: vec![Market {
                    key: "h2h".to_string(),
                    last_update: None,
                    outcomes: vec![Outcome {
                        name: home.to_string(),
                        price: 5000.0,
                        point: None,
                    }],
                }],
            },
            Bookmaker {
                key: "betmgm".to_string(),
                title: "BetMGM".to_string(),
                markets: vec![Market {
                    key: "h2h".to_string(),
                    last_update: None,
                    outcomes: vec![
                        Outcome {
                            name: home.to_string(),
                            price: home_price,
                            point: None,
                        },
                        Outcome {
                            name: away.to_string(),
                            price: away_price,
                            point: None,
                        },
                    ],
                }],
            },
        ],
    }
}

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.odds.bookmaker, "betmgm");
    assert_eq!(config.odds.market, "h2h");
    assert_eq!(config.confidence.exponent, 1.5);
    assert_eq!(config.live.comeback_thresholds.len(), 4);
    assert_eq!(config.ranking.top_n, 5);
    assert_eq!(config.ranking.strong_threshold, 0.6);
    assert_eq!(config.ranking.moderate_threshold, 0.3);
    assert_eq!(config.ranking.large_edge_threshold, 0.15);
}

#[test]
fn test_config_example_keys_take_effect() {
    let edited = include_str!("../../config.toml.example")
        .replace("strong_threshold = 0.6", "strong_threshold = 0.9")
        .replace("large_edge_threshold = 0.15", "large_edge_threshold = 0.5");
    let config: Config = toml::from_str(&edited).unwrap();
    assert_eq!(config.ranking.strong_threshold, 0.9);
    assert_eq!(config.ranking.large_edge_threshold, 0.5);
}

#[test]
fn test_single_home_favorite_value_bet() {
    let mut snapshot = StatsSnapshot::default();
    snapshot
        .stats
        .insert("Team A".to_string(), team(0.65, 7, 110.0, 100.0));

    let games = vec![matchup("g1", "Team A", "Team B", -150.0, 130.0)];
    let scorer = ValueScorer::from_config(&Config::default());
    let bets = find_value_bets(&scorer, &games, &snapshot, 5);

    assert_eq!(bets.len(), 1);
    let bet = &bets[0];
    assert_eq!(bet.team, "Team A");
    assert_eq!(bet.game, "Team B vs Team A");
    assert_eq!(bet.odds, -150.0);
    assert!((bet.implied_prob - implied_probability(-150.0)).abs() < 1e-12);
    assert!((bet.estimated_prob - 0.70).abs() < 1e-9);
    assert!((bet.value - 0.10).abs() < 1e-9);
    assert_eq!(bet.net_rating, 10.0);

    let config = Config::default();
    let expected = confidence_score(bet.value, 10.0, 0.7, &config.confidence);
    assert_eq!(bet.confidence, expected);
    assert!(bet.confidence > 0.0 && bet.confidence < 1.0);
}

#[test]
fn test_top_five_across_games() {
    let mut snapshot = StatsSnapshot::default();
    let mut games = Vec::new();
    // Seven home teams of increasing strength, all priced as underdogs
    for i in 0..7 {
        let home = format!("Home {}", i);
        let away = format!("Away {}", i);
        snapshot.stats.insert(
            home.clone(),
            team(0.5 + i as f64 * 0.03, 5 + i % 3, 105.0 + i as f64, 105.0),
        );
        games.push(matchup(&format!("g{}", i), &home, &away, 150.0, -170.0));
    }

    let scorer = ValueScorer::from_config(&Config::default());
    let all = scorer.score_games(&games, &snapshot);
    assert_eq!(all.len(), 7);

    let ranked = find_value_bets(&scorer, &games, &snapshot, 5);
    assert_eq!(ranked.len(), 5);
    for pair in ranked.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }

    let mut confidences: Vec<f64> = all.iter().map(|b| b.confidence).collect();
    confidences.sort_by(|a, b| b.total_cmp(a));
    let top: Vec<f64> = ranked.iter().map(|b| b.confidence).collect();
    assert_eq!(top, confidences[..5].to_vec());
}

#[test]
fn test_live_games_respect_status_and_gate() {
    let mut snapshot = StatsSnapshot::default();
    snapshot
        .stats
        .insert("Lakers".to_string(), team(0.55, 6, 114.0, 112.0));
    snapshot
        .stats
        .insert("Warriors".to_string(), team(0.5, 5, 117.0, 116.0));
    snapshot
        .stats
        .insert("Celtics".to_string(), team(0.75, 8, 120.0, 109.0));
    snapshot
        .stats
        .insert("Hornets".to_string(), team(0.25, 2, 106.0, 118.0));

    // Finished game: never produces bets
    snapshot.live_scores.insert(
        "Warriors vs Lakers".to_string(),
        LiveGameState {
            period: 4,
            clock: "0:00".to_string(),
            home_score: 99,
            away_score: 120,
            home_team: "Lakers".to_string(),
            away_team: "Warriors".to_string(),
            status: 3,
        },
    );
    // Hornets down 22 with under 10 minutes: gated out
    snapshot.live_scores.insert(
        "Hornets vs Celtics".to_string(),
        LiveGameState {
            period: 4,
            clock: "9:30".to_string(),
            home_score: 98,
            away_score: 76,
            home_team: "Celtics".to_string(),
            away_team: "Hornets".to_string(),
            status: 2,
        },
    );

    let games = vec![
        matchup("g1", "Lakers", "Warriors", 400.0, 400.0),
        matchup("g2", "Celtics", "Hornets", -20_000.0, 20_000.0),
    ];
    let scorer = ValueScorer::from_config(&Config::default());
    let bets = find_value_bets(&scorer, &games, &snapshot, 5);

    assert!(bets.iter().all(|b| b.game != "Warriors vs Lakers"));
    assert!(bets.iter().all(|b| b.team != "Hornets"));
    assert!(bets.iter().all(|b| b.value > 0.0));
}

#[test]
fn test_core_properties() {
    assert_eq!(time_remaining(1, "12:00"), 48.0);
    assert_eq!(time_remaining(4, "00:00"), 0.0);
    assert!(!comeback_viable(-25, 10.0));
    assert!(comeback_viable(-8, 5.0));
}

#[test]
fn test_scoring_is_deterministic() {
    let mut snapshot = StatsSnapshot::default();
    snapshot
        .stats
        .insert("Team A".to_string(), team(0.62, 6, 113.0, 109.0));
    snapshot
        .stats
        .insert("Team B".to_string(), team(0.48, 4, 111.0, 112.0));
    let games = vec![matchup("g1", "Team A", "Team B", 105.0, -125.0)];

    let scorer = ValueScorer::from_config(&Config::default());
    let first = find_value_bets(&scorer, &games, &snapshot, 5);
    let second = find_value_bets(&scorer, &games, &snapshot, 5);
    assert_eq!(first, second);
}
