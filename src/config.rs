//! Configuration types for courtside-value
//!
//! Every section has documented defaults, so a partial file (or none at
//! all) yields the stock NBA model.

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub odds: OddsConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub live: LiveConfig,
    #[serde(default)]
    pub confidence: ConfidenceConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Odds feed configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OddsConfig {
    /// Sports endpoint root of the odds API
    #[serde(default = "default_odds_base_url")]
    pub base_url: String,
    /// Sport key to fetch odds for
    #[serde(default = "default_sport")]
    pub sport: String,
    #[serde(default = "default_regions")]
    pub regions: String,
    /// Comma separated markets to request
    #[serde(default = "default_markets")]
    pub markets: String,
    #[serde(default = "default_odds_format")]
    pub odds_format: String,
    /// The only bookmaker whose quotes are scored
    #[serde(default = "default_bookmaker")]
    pub bookmaker: String,
    /// The only market whose quotes are scored
    #[serde(default = "default_market")]
    pub market: String,
    /// File holding the API key
    #[serde(default = "default_api_key_file")]
    pub api_key_file: PathBuf,
    /// Environment variable that overrides the key file
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_odds_timeout")]
    pub timeout_secs: u64,
}

fn default_odds_base_url() -> String {
    "https://api.the-odds-api.com/v4/sports".to_string()
}
fn default_sport() -> String {
    "basketball_nba".to_string()
}
fn default_regions() -> String {
    "us".to_string()
}
fn default_markets() -> String {
    "h2h,spreads".to_string()
}
fn default_odds_format() -> String {
    "american".to_string()
}
fn default_bookmaker() -> String {
    "betmgm".to_string()
}
fn default_market() -> String {
    "h2h".to_string()
}
fn default_api_key_file() -> PathBuf {
    PathBuf::from("api.txt")
}
fn default_api_key_env() -> String {
    "ODDS_API_KEY".to_string()
}
fn default_odds_timeout() -> u64 {
    10
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            base_url: default_odds_base_url(),
            sport: default_sport(),
            regions: default_regions(),
            markets: default_markets(),
            odds_format: default_odds_format(),
            bookmaker: default_bookmaker(),
            market: default_market(),
            api_key_file: default_api_key_file(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_odds_timeout(),
        }
    }
}

/// Team stats / live score provider configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    /// Program that prints the stats document on stdout
    #[serde(default = "default_stats_program")]
    pub program: String,
    #[serde(default = "default_stats_args")]
    pub args: Vec<String>,
    #[serde(default = "default_stats_timeout")]
    pub timeout_secs: u64,
    /// Read a saved stats document instead of running the program
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

fn default_stats_program() -> String {
    "python".to_string()
}
fn default_stats_args() -> Vec<String> {
    vec!["nba_stats_fetcher.py".to_string()]
}
fn default_stats_timeout() -> u64 {
    60
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            program: default_stats_program(),
            args: default_stats_args(),
            timeout_secs: default_stats_timeout(),
            snapshot_path: None,
        }
    }
}

/// Historical probability model weights
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Weight of season win rate in the historical estimate
    #[serde(default = "default_win_rate_weight")]
    pub win_rate_weight: f64,
    /// Weight of recent form in the historical estimate
    #[serde(default = "default_form_weight")]
    pub form_weight: f64,
    /// Added for the home side, subtracted for the away side
    #[serde(default = "default_home_advantage")]
    pub home_advantage: f64,
    /// Form assumed when no recent results are known
    #[serde(default = "default_neutral_form")]
    pub neutral_form: f64,
    /// Weight of the historical estimate once a game is in progress
    #[serde(default = "default_live_historical_weight")]
    pub live_historical_weight: f64,
    /// Weight of the live estimate once a game is in progress
    #[serde(default = "default_live_weight")]
    pub live_weight: f64,
    /// Lower bound of the blended estimate
    #[serde(default = "default_min_prob")]
    pub min_prob: f64,
    /// Upper bound of the blended estimate
    #[serde(default = "default_max_prob")]
    pub max_prob: f64,
}

fn default_win_rate_weight() -> f64 {
    0.7
}
fn default_form_weight() -> f64 {
    0.3
}
fn default_home_advantage() -> f64 {
    0.035
}
fn default_neutral_form() -> f64 {
    0.5
}
fn default_live_historical_weight() -> f64 {
    0.2
}
fn default_live_weight() -> f64 {
    0.8
}
fn default_min_prob() -> f64 {
    0.01
}
fn default_max_prob() -> f64 {
    0.99
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            win_rate_weight: default_win_rate_weight(),
            form_weight: default_form_weight(),
            home_advantage: default_home_advantage(),
            neutral_form: default_neutral_form(),
            live_historical_weight: default_live_historical_weight(),
            live_weight: default_live_weight(),
            min_prob: default_min_prob(),
            max_prob: default_max_prob(),
        }
    }
}

/// A single step of the comeback-difficulty curve: trailing by more than
/// `deficit` points with fewer than `minutes` left is not viable.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComebackThreshold {
    pub deficit: f64,
    pub minutes: f64,
}

/// Live game clock and win-probability configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiveConfig {
    #[serde(default = "default_regulation_periods")]
    pub regulation_periods: u32,
    #[serde(default = "default_period_minutes")]
    pub period_minutes: f64,
    /// Baseline used for every overtime period
    #[serde(default = "default_overtime_minutes")]
    pub overtime_minutes: f64,
    /// Probability shift per point of lead at full significance
    #[serde(default = "default_lead_factor")]
    pub lead_factor: f64,
    #[serde(default = "default_min_prob")]
    pub min_prob: f64,
    #[serde(default = "default_max_prob")]
    pub max_prob: f64,
    /// Apply the comeback gate to the size of a lead as well as a deficit
    #[serde(default = "default_true")]
    pub gate_leaders: bool,
    #[serde(default = "default_comeback_thresholds")]
    pub comeback_thresholds: Vec<ComebackThreshold>,
}

fn default_true() -> bool {
    true
}
fn default_regulation_periods() -> u32 {
    4
}
fn default_period_minutes() -> f64 {
    12.0
}
fn default_overtime_minutes() -> f64 {
    5.0
}
fn default_lead_factor() -> f64 {
    0.03
}
fn default_comeback_thresholds() -> Vec<ComebackThreshold> {
    vec![
        ComebackThreshold {
            deficit: 20.0,
            minutes: 15.0,
        },
        ComebackThreshold {
            deficit: 15.0,
            minutes: 10.0,
        },
        ComebackThreshold {
            deficit: 10.0,
            minutes: 6.0,
        },
        ComebackThreshold {
            deficit: 5.0,
            minutes: 2.0,
        },
    ]
}

impl LiveConfig {
    /// Length of a regulation game in minutes
    pub fn game_minutes(&self) -> f64 {
        f64::from(self.regulation_periods) * self.period_minutes
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            regulation_periods: default_regulation_periods(),
            period_minutes: default_period_minutes(),
            overtime_minutes: default_overtime_minutes(),
            lead_factor: default_lead_factor(),
            min_prob: default_min_prob(),
            max_prob: default_max_prob(),
            gate_leaders: true,
            comeback_thresholds: default_comeback_thresholds(),
        }
    }
}

/// Confidence score configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfidenceConfig {
    /// Edge multiplier before clamping to [0, 1]
    #[serde(default = "default_value_scale")]
    pub value_scale: f64,
    /// Net rating is normalized as (rating + offset) / span
    #[serde(default = "default_net_rating_offset")]
    pub net_rating_offset: f64,
    #[serde(default = "default_net_rating_span")]
    pub net_rating_span: f64,
    #[serde(default = "default_value_weight")]
    pub value_weight: f64,
    #[serde(default = "default_net_rating_weight")]
    pub net_rating_weight: f64,
    #[serde(default = "default_confidence_form_weight")]
    pub form_weight: f64,
    /// Power applied to the clamped score
    #[serde(default = "default_exponent")]
    pub exponent: f64,
}

fn default_value_scale() -> f64 {
    3.0
}
fn default_net_rating_offset() -> f64 {
    10.0
}
fn default_net_rating_span() -> f64 {
    20.0
}
fn default_value_weight() -> f64 {
    0.5
}
fn default_net_rating_weight() -> f64 {
    0.3
}
fn default_confidence_form_weight() -> f64 {
    0.2
}
fn default_exponent() -> f64 {
    1.5
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            value_scale: default_value_scale(),
            net_rating_offset: default_net_rating_offset(),
            net_rating_span: default_net_rating_span(),
            value_weight: default_value_weight(),
            net_rating_weight: default_net_rating_weight(),
            form_weight: default_confidence_form_weight(),
            exponent: default_exponent(),
        }
    }
}

/// Ranking and recommendation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    /// Number of bets reported
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_strong_threshold")]
    pub strong_threshold: f64,
    #[serde(default = "default_moderate_threshold")]
    pub moderate_threshold: f64,
    /// Edge above which a bet is flagged as a large value gap
    #[serde(default = "default_large_edge_threshold")]
    pub large_edge_threshold: f64,
}

fn default_top_n() -> usize {
    5
}
fn default_strong_threshold() -> f64 {
    0.6
}
fn default_moderate_threshold() -> f64 {
    0.3
}
fn default_large_edge_threshold() -> f64 {
    0.15
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            strong_threshold: default_strong_threshold(),
            moderate_threshold: default_moderate_threshold(),
            large_edge_threshold: default_large_edge_threshold(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
