//! Odds command implementation

use crate::config::Config;
use crate::report::OddsBoard;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OddsArgs {
    /// Sport key (defaults to odds.sport)
    #[arg(long)]
    pub sport: Option<String>,

    /// Read odds from a saved odds API response
    #[arg(long)]
    pub odds_file: Option<PathBuf>,
}

impl OddsArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let sport = self.sport.as_deref().unwrap_or(&config.odds.sport);
        let source = super::odds_source(&config.odds, self.odds_file.as_deref())?;

        let games = source
            .fetch_odds(sport)
            .await
            .with_context(|| format!("Failed to fetch {} odds", sport))?;

        println!("Fetched odds for {} games", games.len());
        print!(
            "{}",
            OddsBoard {
                games: &games,
                bookmaker: &config.odds.bookmaker,
            }
        );
        Ok(())
    }
}
