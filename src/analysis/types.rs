use chrono::{DateTime, Utc};

pub type PlayerId = i64;
pub type SkillValue = i64;
pub type WinRate = f64;

/// A single two-player game as reported by the caller.
/// Records are read-only inputs; nothing here is ever persisted.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub id: i64,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub player1_score: i32,
    pub player2_score: i32,
    pub finished: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl GameRecord {
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }

    /// The side with the strictly higher score. None for unfinished or
    /// drawn games.
    pub fn winner_id(&self) -> Option<PlayerId> {
        if !self.finished {
            return None;
        }
        if self.player1_score > self.player2_score {
            Some(self.player1_id)
        } else if self.player2_score > self.player1_score {
            Some(self.player2_id)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.finished && self.player1_score == self.player2_score
    }
}
