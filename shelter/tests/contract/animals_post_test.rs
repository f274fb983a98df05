//! Contract Test: POST /api/cat, POST /api/dog

use crate::support::{build_app, send};
use animal_shelter_common::types::Species;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn new_cat() -> Value {
    json!({
        "imageURL": "https://example.com/tom.jpg",
        "imageDescription": "A grey tabby sitting in a window.",
        "name": "Tom",
        "sex": "Male",
        "age": 6,
        "breed": "Tabby",
        "story": "Owner moved overseas",
        "timeStamp": "04-02-2018"
    })
}

/// POST /api/cat - 正常系: 201と登録内容を返し、末尾に追加される
#[tokio::test]
async fn test_post_cat_success() {
    let (app, registry) = build_app();

    let (status, body) = send(&app, "POST", "/api/cat", Some(new_cat())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, new_cat());
    assert_eq!(registry.len(Species::Cat).await, 4);
    assert_eq!(registry.list(Species::Cat).await[3].name, "Tom");

    // 先頭は変わらない
    let (_, head) = send(&app, "GET", "/api/cat", None).await;
    assert_eq!(head["name"], "Fluffy");
}

/// POST /api/dog - 正常系: timeStampは省略可能
#[tokio::test]
async fn test_post_dog_without_time_stamp() {
    let (app, registry) = build_app();
    let mut dog = new_cat();
    dog.as_object_mut().unwrap().remove("timeStamp");

    let (status, body) = send(&app, "POST", "/api/dog", Some(dog)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("timeStamp").is_none());
    assert_eq!(registry.len(Species::Dog).await, 4);
    assert_eq!(registry.len(Species::Cat).await, 3);
}

/// POST /api/cat - 異常系: 必須フィールド欠落は400で、何も追加されない
#[tokio::test]
async fn test_post_cat_missing_required_fields() {
    let (app, registry) = build_app();

    for field in [
        "imageURL",
        "imageDescription",
        "name",
        "sex",
        "age",
        "breed",
        "story",
    ] {
        let mut cat = new_cat();
        cat.as_object_mut().unwrap().remove(field);

        let (status, body) = send(&app, "POST", "/api/cat", Some(cat)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {}", field);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains(&format!("Missing '{}' in request body", field)),
            "unexpected error for {}: {}",
            field,
            body
        );
    }

    assert_eq!(registry.len(Species::Cat).await, 3);
}

/// POST /api/dog - 異常系: 不正な性別
#[tokio::test]
async fn test_post_dog_invalid_sex() {
    let (app, registry) = build_app();
    let mut dog = new_cat();
    dog["sex"] = json!("Unknown");

    let (status, body) = send(&app, "POST", "/api/dog", Some(dog)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid sex"));
    assert_eq!(registry.len(Species::Dog).await, 3);
}

/// POST /api/cat - 異常系: 前後に空白を含む性別は受け付けない
#[tokio::test]
async fn test_post_cat_padded_sex_is_rejected() {
    let (app, registry) = build_app();
    let mut cat = new_cat();
    cat["sex"] = json!(" Male ");

    let (status, body) = send(&app, "POST", "/api/cat", Some(cat)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid sex"));
    assert_eq!(registry.len(Species::Cat).await, 3);
}

/// POST /api/dog - 異常系: 不正な到着日
#[tokio::test]
async fn test_post_dog_invalid_time_stamp() {
    let (app, _) = build_app();
    let mut dog = new_cat();
    dog["timeStamp"] = json!("2018-04-02");

    let (status, body) = send(&app, "POST", "/api/dog", Some(dog)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("MM-DD-YYYY"));
}

/// POST /api/cat - 異常系: 壊れたJSONは400
#[tokio::test]
async fn test_post_cat_malformed_json() {
    let (app, registry) = build_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/cat")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
    assert_eq!(registry.len(Species::Cat).await, 3);
}
