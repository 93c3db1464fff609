//! CLI interface for courtside-value
//!
//! Provides subcommands for:
//! - `analyze`: Score today's games and report the best value bets
//! - `odds`: Show the configured bookmaker's odds
//! - `sports`: List sports with available odds
//! - `config`: Show the effective configuration

mod analyze;
mod odds;
mod sports;

pub use analyze::AnalyzeArgs;
pub use odds::OddsArgs;
pub use sports::SportsArgs;

use crate::config::OddsConfig;
use crate::feed::{load_api_key, OddsApiClient, OddsFile, OddsSource};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "courtside-value")]
#[command(about = "Value-bet scanner for NBA moneyline markets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score games and report the best value bets
    Analyze(AnalyzeArgs),
    /// Show the configured bookmaker's odds
    Odds(OddsArgs),
    /// List sports with available odds
    Sports(SportsArgs),
    /// Show the effective configuration
    Config,
}

/// Odds from a saved file when given, otherwise from the odds API
fn odds_source(
    config: &OddsConfig,
    odds_file: Option<&Path>,
) -> anyhow::Result<Box<dyn OddsSource>> {
    if let Some(path) = odds_file {
        return Ok(Box::new(OddsFile::new(path)));
    }

    let api_key = load_api_key(config).context("Failed to load odds API key")?;
    let client = OddsApiClient::new(config.clone(), api_key)?;
    Ok(Box::new(client))
}
