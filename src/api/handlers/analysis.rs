use axum::{
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::AppState;
use crate::analysis::GameRecord;
use crate::api::models::{
    AnalyzeRequest, AnalyzeResponse, GameData, PlayerStatsResponse, ValidationError,
};

pub async fn analyze_player(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_error(rejection),
    };

    let games = to_game_records(request.games);
    let outcome = state.analysis.analyze(request.player_id, &games);

    Json(AnalyzeResponse::from(outcome)).into_response()
}

pub async fn get_player_stats(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_error(rejection),
    };

    let games = to_game_records(request.games);
    let stats = state.analysis.player_stats(request.player_id, &games);

    Json(PlayerStatsResponse::from(stats)).into_response()
}

fn to_game_records(games: Vec<GameData>) -> Vec<GameRecord> {
    games.into_iter().map(GameRecord::from).collect()
}

fn validation_error(rejection: JsonRejection) -> Response {
    let body = ValidationError {
        error: "invalid request body",
        detail: rejection.body_text(),
    };
    (rejection.status(), Json(body)).into_response()
}
