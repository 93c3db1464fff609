//! Game clock: period and "MM:SS" clock to minutes remaining

use crate::config::LiveConfig;

/// Converts a period number and period clock into minutes of game time left
#[derive(Debug, Clone)]
pub struct GameClock {
    regulation_periods: u32,
    period_minutes: f64,
    overtime_minutes: f64,
}

impl GameClock {
    /// Create a clock model from live configuration
    pub fn new(config: &LiveConfig) -> Self {
        Self {
            regulation_periods: config.regulation_periods,
            period_minutes: config.period_minutes,
            overtime_minutes: config.overtime_minutes,
        }
    }

    /// Minutes in the periods after `period`.
    ///
    /// Every overtime period gets the same flat baseline; elapsed overtime
    /// periods are not counted down.
    pub fn baseline_minutes(&self, period: u32) -> f64 {
        if period <= self.regulation_periods {
            f64::from(self.regulation_periods - period) * self.period_minutes
        } else {
            self.overtime_minutes
        }
    }

    /// Total minutes left given the period and its "MM:SS" clock
    pub fn minutes_remaining(&self, period: u32, clock: &str) -> f64 {
        let (minutes, seconds) = parse_clock(clock);
        self.baseline_minutes(period) + (minutes + seconds / 60.0)
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(&LiveConfig::default())
    }
}

/// Minutes remaining under the standard four 12-minute period game
pub fn time_remaining(period: u32, clock: &str) -> f64 {
    GameClock::default().minutes_remaining(period, clock)
}

/// Parse "MM:SS" leniently.
///
/// Reads as much as it can: unparseable minutes yield (0, 0), and a
/// missing or unparseable seconds part yields 0 seconds.
fn parse_clock(clock: &str) -> (f64, f64) {
    let Some((minutes, rest)) = leading_number(clock) else {
        return (0.0, 0.0);
    };
    let seconds = rest
        .strip_prefix(':')
        .and_then(leading_number)
        .map(|(seconds, _)| seconds)
        .unwrap_or(0.0);
    (minutes, seconds)
}

/// Split a leading decimal number off `s`
fn leading_number(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
