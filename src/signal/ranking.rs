//! Ranking and selection of value bets

use super::{ValueBet, ValueScorer};
use crate::feed::Game;
use crate::model::ProbabilityModel;
use crate::stats::StatsSnapshot;
use crate::telemetry::{increment, set_gauge, CountMetric, GaugeMetric};

/// Keep positive-value bets, order by confidence (highest first) and keep
/// the best `top_n`. Ties keep their input order.
pub fn rank_value_bets(mut bets: Vec<ValueBet>, top_n: usize) -> Vec<ValueBet> {
    bets.retain(|b| b.value > 0.0);
    bets.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    bets.truncate(top_n);
    bets
}

/// Score all games and return the ranked top `top_n` value bets
pub fn find_value_bets<M: ProbabilityModel>(
    scorer: &ValueScorer<M>,
    games: &[Game],
    snapshot: &StatsSnapshot,
    top_n: usize,
) -> Vec<ValueBet> {
    let candidates = scorer.score_games(games, snapshot);
    let found = candidates.len();
    let ranked = rank_value_bets(candidates, top_n);

    increment(CountMetric::GamesScored, games.len() as u64);
    increment(CountMetric::ValueBetsFound, found as u64);
    set_gauge(GaugeMetric::LiveGames, snapshot.live_game_count() as f64);
    if let Some(best) = ranked.first() {
        set_gauge(GaugeMetric::TopConfidence, best.confidence);
    }

    tracing::info!(
        games = games.len(),
        value_bets = found,
        reported = ranked.len(),
        "Value analysis complete"
    );

    ranked
}
