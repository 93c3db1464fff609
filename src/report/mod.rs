//! Console report rendering
//!
//! Each view is a small borrowed wrapper implementing `Display`, so the
//! CLI prints it and tests can render it to a string.

use crate::config::RankingConfig;
use crate::feed::{Game, Sport};
use crate::model::GameClock;
use crate::signal::ValueBet;
use crate::stats::LiveGameState;
use std::collections::BTreeMap;
use std::fmt;

/// Sports list, one `- Title (key)` line per sport
pub struct SportsList<'a>(pub &'a [Sport]);

impl fmt::Display for SportsList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Sports:")?;
        for sport in self.0 {
            writeln!(f, "- {} ({})", sport.title, sport.key)?;
        }
        Ok(())
    }
}

/// Every market one bookmaker quotes, per game
pub struct OddsBoard<'a> {
    pub games: &'a [Game],
    pub bookmaker: &'a str,
}

impl fmt::Display for OddsBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for game in self.games {
            writeln!(f)?;
            writeln!(f, "{} vs {}", game.home_team, game.away_team)?;
            writeln!(f, "----------------------------------------")?;

            let Some(book) = game.bookmaker(self.bookmaker) else {
                continue;
            };
            let title = if book.title.is_empty() {
                &book.key
            } else {
                &book.title
            };
            writeln!(f, "{} Odds:", title)?;

            for market in &book.markets {
                writeln!(f)?;
                writeln!(f, "Market: {}", market.key)?;
                for outcome in &market.outcomes {
                    match outcome.point {
                        Some(point) => {
                            writeln!(f, "  {} {:+}: {:+}", outcome.name, point, outcome.price)?
                        }
                        None => writeln!(f, "  {}: {:+}", outcome.name, outcome.price)?,
                    }
                }
            }
        }
        Ok(())
    }
}

/// Report card for one ranked value bet
pub struct ValueBetCard<'a> {
    pub rank: usize,
    pub bet: &'a ValueBet,
    pub live_scores: &'a BTreeMap<String, LiveGameState>,
    pub clock: &'a GameClock,
    pub ranking: &'a RankingConfig,
}

impl fmt::Display for ValueBetCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bet = self.bet;
        writeln!(f)?;
        writeln!(f, "Value Bet #{}:", self.rank)?;
        writeln!(f, "Game: {}", bet.game)?;

        if let Some(live) = self.live_scores.get(&bet.game) {
            let minutes = self.clock.minutes_remaining(live.period, &live.clock);
            let team_lead = if bet.team == live.away_team {
                -live.home_lead()
            } else {
                live.home_lead()
            };

            writeln!(f)?;
            writeln!(f, "LIVE GAME STATUS:")?;
            writeln!(
                f,
                "Quarter: {}  Time Remaining: {}",
                live.period, live.clock
            )?;
            writeln!(
                f,
                "Score: {} {} - {} {}",
                live.home_team, live.home_score, live.away_score, live.away_team
            )?;
            writeln!(
                f,
                "Team Status: {} {:+} with {:.1} minutes remaining",
                bet.team, team_lead, minutes
            )?;
        }

        writeln!(f)?;
        writeln!(f, "BETTING ANALYSIS:")?;
        writeln!(f, "Recommended Bet: {}", bet.team)?;
        writeln!(f, "Current Odds: {:+.2}", bet.odds)?;
        writeln!(f, "Implied Win Probability: {:.1}%", bet.implied_prob * 100.0)?;
        writeln!(f, "Model Win Probability: {:.1}%", bet.estimated_prob * 100.0)?;
        writeln!(f, "Value Edge: {:.1}%", bet.value * 100.0)?;
        writeln!(f, "Net Rating: {:+.1}", bet.net_rating)?;
        writeln!(f, "Confidence Score: {:.3}", bet.confidence)?;

        writeln!(f)?;
        writeln!(f, "RECOMMENDATION:")?;
        writeln!(f, "{}", bet.recommendation(self.ranking).advice())?;
        if bet.is_large_edge(self.ranking) {
            writeln!(
                f,
                "Large value gap detected (>{:.0}%) - Worth strong consideration",
                self.ranking.large_edge_threshold * 100.0
            )?;
        }
        writeln!(f, "-------------------")
    }
}

/// Ranked value bets with their cards
pub struct ValueReport<'a> {
    pub bets: &'a [ValueBet],
    pub live_scores: &'a BTreeMap<String, LiveGameState>,
    pub clock: &'a GameClock,
    pub ranking: &'a RankingConfig,
}

impl fmt::Display for ValueReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Value Betting Analysis:")?;
        writeln!(f, "=============================")?;

        if self.bets.is_empty() {
            writeln!(f, "No value bets found.")?;
        }

        for (i, bet) in self.bets.iter().enumerate() {
            let card = ValueBetCard {
                rank: i + 1,
                bet,
                live_scores: self.live_scores,
                clock: self.clock,
                ranking: self.ranking,
            };
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

/// Current live scoreboard
pub struct LiveBoard<'a>(pub &'a BTreeMap<String, LiveGameState>);

impl fmt::Display for LiveBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "Current Live Games:")?;
        for (key, live) in self.0 {
            writeln!(f)?;
            writeln!(f, "{}:", key)?;
            writeln!(f, "Period: {}, Clock: {}", live.period, live.clock)?;
            writeln!(
                f,
                "Score: {} {} - {} {}",
                live.home_team, live.home_score, live.away_score, live.away_team
            )?;
        }
        Ok(())
    }
}
