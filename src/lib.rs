//! courtside-value: value-bet scanner for NBA moneyline markets
//!
//! This library provides the core components for:
//! - Odds retrieval from The Odds API
//! - Team stats and live scores from an injected provider
//! - Win probability estimates from season, form and live state
//! - Value edge and confidence scoring
//! - Ranking of the best value bets
//! - Console reporting

pub mod cli;
pub mod config;
pub mod feed;
pub mod model;
pub mod report;
pub mod signal;
pub mod stats;
pub mod telemetry;
