//! American odds conversion

/// Implied win probability of an American moneyline price.
///
/// Positive prices are underdog payouts per 100 staked, negative prices the
/// stake needed to win 100. Bookmaker margin is not removed.
///
/// A zero or non-finite price has no meaning; callers check
/// [`is_quotable`] first.
pub fn implied_probability(american_odds: f64) -> f64 {
    if american_odds > 0.0 {
        100.0 / (american_odds + 100.0)
    } else {
        (-american_odds) / (-american_odds + 100.0)
    }
}

/// Whether a price can be converted into a probability
pub fn is_quotable(american_odds: f64) -> bool {
    american_odds.is_finite() && american_odds != 0.0
}
