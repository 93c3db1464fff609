//! Run metrics
//!
//! Recorded through the `metrics` facade; they are no-ops unless the host
//! installs a recorder.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Odds API round trip
    OddsFetch,
    /// Stats provider run
    StatsFetch,
    /// Scoring and ranking of all games
    Analysis,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CountMetric {
    /// Games passed to the scorer
    GamesScored,
    /// Outcomes with stats and a usable price
    OutcomesScored,
    /// Positive-value bets before ranking
    ValueBetsFound,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Teams with stats this run
    TeamsLoaded,
    /// Games currently in progress
    LiveGames,
    /// Confidence of the best ranked bet
    TopConfidence,
}

fn latency_name(metric: LatencyMetric) -> &'static str {
    match metric {
        LatencyMetric::OddsFetch => "courtside_odds_fetch_latency_ms",
        LatencyMetric::StatsFetch => "courtside_stats_fetch_latency_ms",
        LatencyMetric::Analysis => "courtside_analysis_latency_ms",
    }
}

fn count_name(metric: CountMetric) -> &'static str {
    match metric {
        CountMetric::GamesScored => "courtside_games_scored_total",
        CountMetric::OutcomesScored => "courtside_outcomes_scored_total",
        CountMetric::ValueBetsFound => "courtside_value_bets_found_total",
    }
}

fn gauge_name(metric: GaugeMetric) -> &'static str {
    match metric {
        GaugeMetric::TeamsLoaded => "courtside_teams_loaded",
        GaugeMetric::LiveGames => "courtside_live_games",
        GaugeMetric::TopConfidence => "courtside_top_confidence",
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let name = latency_name(metric);
    metrics::histogram!(name).record(duration.as_secs_f64() * 1000.0);
    tracing::debug!(
        metric = name,
        value_ms = duration.as_millis() as u64,
        "Recording latency"
    );
}

/// Increment a counter
pub fn increment(metric: CountMetric, by: u64) {
    metrics::counter!(count_name(metric)).increment(by);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let name = gauge_name(metric);
    metrics::gauge!(name).set(value);
    tracing::debug!(metric = name, value = value, "Setting gauge");
}
