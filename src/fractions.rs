//! Contribution Fractions
//!
//! Pure helpers normalizing one player's per-row contribution against
//! the match totals. Results are rounded to 2 decimal places.

/// Regulation match length in minutes; the default for
/// `minutes_fraction` configuration.
pub const MATCH_TOTAL_MINUTES: i64 = 90;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fraction of the match's combined goal total scored by this player
///
/// Returns 0 unconditionally when the player's own goals are 0. That
/// short-circuit is given behavior and also covers the case where the
/// match total itself is 0.
pub fn goal_fraction(player_goals: i64, match_total_goals: i64) -> f64 {
    if player_goals == 0 {
        return 0.0;
    }

    round2(player_goals as f64 / match_total_goals as f64)
}

/// Fraction of the regulation match length this player was on the pitch
///
/// Not clamped: more than `match_minutes` played yields a value above
/// 1.0.
pub fn minutes_fraction(minutes_played: i64, match_minutes: i64) -> f64 {
    round2(minutes_played as f64 / match_minutes as f64)
}
