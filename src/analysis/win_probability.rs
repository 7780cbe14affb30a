use super::types::{GameRecord, PlayerId, WinRate};
use crate::config::settings::AnalysisSettings;

/// Empirical win ratio for a player over finished games, rounded to two
/// decimal places. Every finished record counts toward the denominator;
/// a win requires being a side with the strictly higher score, so drawn
/// games count as non-wins. With no finished games at all there is no
/// information and the configured default applies.
pub fn estimate_win_probability(
    player_id: PlayerId,
    games: &[GameRecord],
    settings: &AnalysisSettings,
) -> WinRate {
    let mut wins = 0u32;
    let mut total = 0u32;

    for game in games {
        if !game.finished {
            continue;
        }
        total += 1;
        if game.winner_id() == Some(player_id) {
            wins += 1;
        }
    }

    if total == 0 {
        return settings.default_win_probability;
    }

    round_to_two_decimals(f64::from(wins) / f64::from(total))
}

fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
