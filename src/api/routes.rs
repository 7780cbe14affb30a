use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    analysis::{analyze_player, get_player_stats},
    health::health,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze", post(analyze_player))
        .route("/stats", post(get_player_stats))
        .route("/health", get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::time::Instant;
    use tower::ServiceExt;

    use crate::config::settings::AppConfig;
    use crate::services::analysis::AnalysisService;

    fn test_router() -> Router {
        let state = Arc::new(AppState {
            analysis: AnalysisService::new(AppConfig::new()),
            started_at: Instant::now(),
        });
        create_router(state)
    }

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    fn game(id: i64, p1: i64, p2: i64, s1: i32, s2: i32, finished: bool) -> Value {
        let finished_at = finished.then_some("2026-01-16T10:30:00Z");
        json!({
            "id": id,
            "player1Id": p1,
            "player2Id": p2,
            "player1Score": s1,
            "player2Score": s2,
            "isFinished": finished,
            "startedAt": "2026-01-16T10:00:00Z",
            "finishedAt": finished_at,
        })
    }

    #[tokio::test]
    async fn test_analyze_with_no_games_uses_defaults() {
        let (status, body) = post_json("/analyze", json!({ "playerId": 1, "games": [] })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["winProbability"], 0.5);
        assert_eq!(body["recommendedOpponentSkill"], 1000);
        assert_eq!(body["predictedSkill"], 1000);
        assert_eq!(
            body["strategyTips"],
            json!(["Balance attack and defense", "Adapt strategy based on opponent moves"])
        );
    }

    #[tokio::test]
    async fn test_analyze_with_strong_record() {
        let mut games = Vec::new();
        for i in 0..7 {
            games.push(game(i, 1, 2, 5, 2, true));
        }
        for i in 7..10 {
            games.push(game(i, 1, 2, 2, 5, true));
        }

        let (status, body) = post_json("/analyze", json!({ "playerId": 1, "games": games })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["winProbability"], 0.7);
        assert_eq!(body["predictedSkill"], 1080);
        assert_eq!(
            body["strategyTips"],
            json!(["Maintain aggressive play", "Exploit opponent weaknesses"])
        );
    }

    #[tokio::test]
    async fn test_analyze_counts_draws_as_non_wins() {
        let games = vec![game(1, 1, 2, 3, 3, true), game(2, 1, 2, 5, 0, true)];

        let (status, body) = post_json("/analyze", json!({ "playerId": 1, "games": games })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["winProbability"], 0.5);
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_fields() {
        let (status, body) = post_json("/analyze", json!({ "games": [] })).await;

        assert!(status.is_client_error());
        assert_eq!(body["error"], "invalid request body");
        assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
    }

    #[tokio::test]
    async fn test_analyze_rejects_mistyped_fields() {
        let games = vec![json!({
            "id": 1,
            "player1Id": "not-a-number",
            "player2Id": 2,
            "player1Score": 5,
            "player2Score": 2,
            "isFinished": true,
            "startedAt": "2026-01-16T10:00:00Z",
            "finishedAt": null,
        })];

        let (status, body) = post_json("/analyze", json!({ "playerId": 1, "games": games })).await;

        assert!(status.is_client_error());
        assert_eq!(body["error"], "invalid request body");
    }

    #[tokio::test]
    async fn test_stats_counts_wins_losses_and_draws() {
        let games = vec![
            game(1, 1, 2, 5, 2, true),
            game(2, 2, 1, 5, 2, true),
            game(3, 1, 3, 3, 3, true),
            game(4, 1, 2, 9, 0, false),
        ];

        let (status, body) = post_json("/stats", json!({ "playerId": 1, "games": games })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchesPlayed"], 3);
        assert_eq!(body["wins"], 1);
        assert_eq!(body["losses"], 1);
        assert_eq!(body["draws"], 1);
        assert_eq!(body["winRate"], 33.33);
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["uptimeSecs"].as_u64().is_some());
    }
}
