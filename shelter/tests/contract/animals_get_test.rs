//! Contract Test: GET /api/cat, GET /api/dog

use crate::support::{build_app, build_app_with, send};
use animal_shelter::registry::ShelterRegistry;
use axum::http::StatusCode;

/// GET /api/cat - 正常系: 先頭の猫を返す
#[tokio::test]
async fn test_get_cat_returns_first_seeded_cat() {
    let (app, _) = build_app();

    let (status, body) = send(&app, "GET", "/api/cat", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Fluffy");
    assert_eq!(body["sex"], "Female");
    assert_eq!(body["age"], 2);
    assert_eq!(body["breed"], "Bengal");
    assert!(body["imageURL"].as_str().unwrap().starts_with("https://"));
    assert!(body["imageDescription"].is_string());
    assert!(body["story"].is_string());
    assert_eq!(body["timeStamp"], "01-12-2018");
}

/// GET /api/dog - 正常系: 先頭の犬を返す
#[tokio::test]
async fn test_get_dog_returns_first_seeded_dog() {
    let (app, _) = build_app();

    let (status, body) = send(&app, "GET", "/api/dog", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Zeus");
    assert_eq!(body["breed"], "Golden Retriever");
}

/// GET /api/cat - 参照してもキューは変化しない
#[tokio::test]
async fn test_get_cat_is_idempotent() {
    let (app, registry) = build_app();

    let (_, first) = send(&app, "GET", "/api/cat", None).await;
    let (_, second) = send(&app, "GET", "/api/cat", None).await;

    assert_eq!(first, second);
    assert_eq!(
        registry.len(animal_shelter_common::types::Species::Cat).await,
        3
    );
}

/// GET /api/dog - 異常系: 空のシェルターは404
#[tokio::test]
async fn test_get_dog_empty_shelter() {
    let (app, _) = build_app_with(ShelterRegistry::new());

    let (status, body) = send(&app, "GET", "/api/dog", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No dogs available for adoption");
}
