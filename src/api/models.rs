use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::types::{GameRecord, PlayerId, SkillValue};
use crate::analysis::PlayerStats;
use crate::services::analysis::AnalysisOutcome;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub id: i64,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub player1_score: i32,
    pub player2_score: i32,
    pub is_finished: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<GameData> for GameRecord {
    fn from(data: GameData) -> Self {
        GameRecord {
            id: data.id,
            player1_id: data.player1_id,
            player2_id: data.player2_id,
            player1_score: data.player1_score,
            player2_score: data.player2_score,
            finished: data.is_finished,
            started_at: data.started_at,
            finished_at: data.finished_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub player_id: PlayerId,
    pub games: Vec<GameData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub win_probability: f64,
    pub recommended_opponent_skill: SkillValue,
    pub strategy_tips: Vec<String>,
    pub predicted_skill: SkillValue,
}

impl From<AnalysisOutcome> for AnalyzeResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        AnalyzeResponse {
            win_probability: outcome.win_probability,
            recommended_opponent_skill: outcome.recommended_opponent_skill,
            strategy_tips: outcome
                .strategy_tips
                .iter()
                .map(|tip| tip.to_string())
                .collect(),
            predicted_skill: outcome.predicted_skill,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    pub matches_played: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub win_rate: f64,
}

impl From<PlayerStats> for PlayerStatsResponse {
    fn from(stats: PlayerStats) -> Self {
        PlayerStatsResponse {
            matches_played: stats.matches_played,
            wins: stats.wins,
            losses: stats.losses,
            draws: stats.draws,
            win_rate: stats.win_rate_percent,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

/// Body returned for requests the schema layer rejects. `detail` carries
/// the deserializer's field-level message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub error: &'static str,
    pub detail: String,
}
