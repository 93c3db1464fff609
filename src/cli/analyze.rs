//! Analyze command implementation

use crate::config::Config;
use crate::model::GameClock;
use crate::report::{LiveBoard, OddsBoard, ValueReport};
use crate::signal::{find_value_bets, ValueScorer};
use crate::stats;
use crate::telemetry::{record_latency, set_gauge, GaugeMetric, LatencyMetric};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Read odds from a saved odds API response
    #[arg(long)]
    pub odds_file: Option<PathBuf>,

    /// Read team stats and live scores from a saved stats document
    #[arg(long)]
    pub stats_file: Option<PathBuf>,

    /// Number of bets to report (defaults to ranking.top_n)
    #[arg(long)]
    pub top: Option<usize>,

    /// Print the ranked bets as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not print the bookmaker odds board
    #[arg(long)]
    pub no_odds: bool,
}

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut stats_config = config.stats.clone();
        if let Some(path) = &self.stats_file {
            stats_config.snapshot_path = Some(path.clone());
        }
        let stats_provider = stats::provider_from_config(&stats_config);
        let odds_source = super::odds_source(&config.odds, self.odds_file.as_deref())?;
        let sport = config.odds.sport.as_str();

        // Both inputs must be complete before anything is scored.
        let stats_task = async {
            let started = Instant::now();
            let snapshot = stats_provider
                .fetch()
                .await
                .context("Failed to load team stats")?;
            record_latency(LatencyMetric::StatsFetch, started.elapsed());
            anyhow::Ok(snapshot)
        };
        let odds_task = async {
            let started = Instant::now();
            let games = odds_source
                .fetch_odds(sport)
                .await
                .with_context(|| format!("Failed to fetch {} odds", sport))?;
            record_latency(LatencyMetric::OddsFetch, started.elapsed());
            anyhow::Ok(games)
        };
        let (snapshot, games) = tokio::try_join!(stats_task, odds_task)?;

        set_gauge(GaugeMetric::TeamsLoaded, snapshot.stats.len() as f64);
        tracing::info!(
            teams = snapshot.stats.len(),
            live_games = snapshot.live_scores.len(),
            games = games.len(),
            "Inputs loaded"
        );

        let started = Instant::now();
        let scorer = ValueScorer::from_config(config);
        let top_n = self.top.unwrap_or(config.ranking.top_n);
        let bets = find_value_bets(&scorer, &games, &snapshot, top_n);
        record_latency(LatencyMetric::Analysis, started.elapsed());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&bets)?);
            return Ok(());
        }

        println!(
            "Loaded data for {} teams and {} live games",
            snapshot.stats.len(),
            snapshot.live_scores.len()
        );
        println!("Fetched odds for {} games", games.len());

        if !self.no_odds {
            print!(
                "{}",
                OddsBoard {
                    games: &games,
                    bookmaker: &config.odds.bookmaker,
                }
            );
        }

        let clock = GameClock::new(&config.live);
        print!(
            "{}",
            ValueReport {
                bets: &bets,
                live_scores: &snapshot.live_scores,
                clock: &clock,
                ranking: &config.ranking,
            }
        );
        print!("{}", LiveBoard(&snapshot.live_scores));
        println!();
        println!("Analysis complete!");

        Ok(())
    }
}
