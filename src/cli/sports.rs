//! Sports command implementation

use crate::config::Config;
use crate::report::SportsList;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SportsArgs {
    /// Derive the list from a saved odds API response
    #[arg(long)]
    pub odds_file: Option<PathBuf>,
}

impl SportsArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let source = super::odds_source(&config.odds, self.odds_file.as_deref())?;
        let sports = source
            .fetch_sports()
            .await
            .context("Failed to fetch sports")?;

        print!("{}", SportsList(&sports));
        Ok(())
    }
}
