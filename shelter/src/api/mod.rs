//! REST APIハンドラー
//!
//! 動物の参照・引き渡し・登録API

pub mod animals;
pub mod error;
pub mod health;

use crate::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// クライアントのオリジンからCORSレイヤーを作成
///
/// `*` は全オリジンを許可する。それ以外は一致したオリジンにのみ
/// `Access-Control-Allow-Origin` を返す。パースできないオリジンはどこからも許可しない。
pub fn cors_layer(client_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if client_origin.trim() == "*" {
        return layer.allow_origin(Any);
    }

    match client_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(AllowOrigin::list([origin])),
        Err(e) => {
            tracing::warn!(
                "Invalid CLIENT_ORIGIN '{}' ({}), cross-origin requests will be rejected",
                client_origin,
                e
            );
            layer
        }
    }
}

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.client_origin);

    Router::new()
        .route(
            "/api/cat",
            get(animals::get_cat)
                .delete(animals::adopt_cat)
                .post(animals::add_cat),
        )
        .route(
            "/api/dog",
            get(animals::get_dog)
                .delete(animals::adopt_dog)
                .post(animals::add_dog),
        )
        .route("/api/oldest", get(animals::get_oldest))
        .route("/api/health", get(health::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
