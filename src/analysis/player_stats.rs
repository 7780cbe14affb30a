use super::types::{GameRecord, PlayerId};

/// Per-player record over finished games the player took part in.
/// `win_rate_percent` is a percentage rounded to two decimals, unlike the
/// [0,1] probability used elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub matches_played: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub win_rate_percent: f64,
}

pub fn compute_player_stats(player_id: PlayerId, games: &[GameRecord]) -> PlayerStats {
    let mut stats = PlayerStats {
        matches_played: 0,
        wins: 0,
        losses: 0,
        draws: 0,
        win_rate_percent: 0.0,
    };

    for game in games {
        if !game.finished || !game.involves(player_id) {
            continue;
        }
        stats.matches_played += 1;
        if game.is_draw() {
            stats.draws += 1;
        } else if game.winner_id() == Some(player_id) {
            stats.wins += 1;
        } else {
            stats.losses += 1;
        }
    }

    if stats.matches_played > 0 {
        let ratio = f64::from(stats.wins) / f64::from(stats.matches_played);
        stats.win_rate_percent = (ratio * 100.0 * 100.0).round() / 100.0;
    }

    stats
}
