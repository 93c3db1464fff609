use clap::Parser;
use courtside_value::cli::{Cli, Commands};
use courtside_value::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    courtside_value::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::info!("Starting value analysis");
            args.execute(&config).await?;
        }
        Commands::Odds(args) => {
            args.execute(&config).await?;
        }
        Commands::Sports(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Odds: {} from {} ({} market)",
                config.odds.sport, config.odds.bookmaker, config.odds.market
            );
            match &config.stats.snapshot_path {
                Some(path) => println!("  Stats: snapshot {}", path.display()),
                None => println!(
                    "  Stats: {} {}",
                    config.stats.program,
                    config.stats.args.join(" ")
                ),
            }
            println!(
                "  Model: win_rate={}, form={}, home={}, live={}",
                config.model.win_rate_weight,
                config.model.form_weight,
                config.model.home_advantage,
                config.model.live_weight
            );
            println!(
                "  Confidence: exponent={}, top_n={}",
                config.confidence.exponent, config.ranking.top_n
            );
        }
    }

    Ok(())
}
