use super::types::WinRate;
use crate::config::settings::AnalysisSettings;

/// Picks the tip pair for a win-rate band. Comparisons are strict on each
/// upper edge, so a rate exactly at a threshold belongs to the band above
/// it. Out-of-range rates fall into the nearest band by the same
/// comparisons.
pub fn generate_strategy_tips(win_rate: WinRate, settings: &AnalysisSettings) -> [&'static str; 2] {
    if win_rate < settings.low_win_rate_threshold {
        ["Focus on defensive moves", "Avoid risky early attacks"]
    } else if win_rate < settings.high_win_rate_threshold {
        [
            "Balance attack and defense",
            "Adapt strategy based on opponent moves",
        ]
    } else {
        ["Maintain aggressive play", "Exploit opponent weaknesses"]
    }
}
