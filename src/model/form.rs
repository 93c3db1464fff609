//! Recent form estimate

/// Form used when a team has no recorded results
const NEUTRAL_FORM: f64 = 0.5;

/// Fraction of recent games won, most recent first.
///
/// An empty record is treated as neutral (0.5).
pub fn recent_form(results: &[bool]) -> f64 {
    recent_form_or(results, NEUTRAL_FORM)
}

/// Fraction of recent games won, or `neutral` for an empty record
pub fn recent_form_or(results: &[bool], neutral: f64) -> f64 {
    if results.is_empty() {
        return neutral;
    }
    let wins = results.iter().filter(|&&won| won).count();
    wins as f64 / results.len() as f64
}
