//! コントラクトテスト用ヘルパー

use animal_shelter::{api, registry::ShelterRegistry, AppState};
use animal_shelter_common::config::ServerConfig;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// テスト用のクライアントオリジン
pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// 初期データ入りのアプリを作成
pub fn build_app() -> (Router, ShelterRegistry) {
    build_app_with(ShelterRegistry::with_seed())
}

/// 指定したレジストリでアプリを作成
pub fn build_app_with(registry: ShelterRegistry) -> (Router, ShelterRegistry) {
    let state = AppState {
        registry: registry.clone(),
        config: ServerConfig {
            client_origin: TEST_ORIGIN.to_string(),
            ..Default::default()
        },
    };
    (api::create_router(state), registry)
}

/// リクエストを送り、ステータスとJSONボディ（空ならNull）を返す
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
