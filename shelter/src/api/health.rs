//! ヘルスチェックAPIハンドラー

use animal_shelter_common::{protocol::HealthResponse, types::Species};
use axum::{extract::State, Json};

use crate::AppState;

/// GET /api/health - 稼働確認と各シェルターの頭数
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        cats: state.registry.len(Species::Cat).await,
        dogs: state.registry.len(Species::Dog).await,
    })
}
