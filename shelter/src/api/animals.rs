//! 動物APIハンドラー
//!
//! 先頭の参照、引き渡し（ローテーション）、新規登録、最古の動物の取得

use animal_shelter_common::{
    protocol::{NewAnimalRequest, OldestAnimalResponse},
    types::{AnimalRecord, Species},
};
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use super::error::AppError;
use crate::AppState;

async fn peek_animal(state: &AppState, species: Species) -> Result<Json<AnimalRecord>, AppError> {
    let animal = state.registry.peek(species).await?;
    Ok(Json(animal))
}

async fn adopt_animal(state: &AppState, species: Species) -> Result<StatusCode, AppError> {
    // 常に引き取り手のいる状態を保つため、引き渡した動物は末尾に戻す
    state.registry.rotate(species).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_animal(
    state: &AppState,
    species: Species,
    payload: Result<Json<NewAnimalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnimalRecord>), AppError> {
    let Json(req) = payload?;
    let animal = req.validate()?;
    let animal = state.registry.admit(species, animal).await;
    Ok((StatusCode::CREATED, Json(animal)))
}

/// GET /api/cat - 次に引き渡される猫
pub async fn get_cat(State(state): State<AppState>) -> Result<Json<AnimalRecord>, AppError> {
    peek_animal(&state, Species::Cat).await
}

/// GET /api/dog - 次に引き渡される犬
pub async fn get_dog(State(state): State<AppState>) -> Result<Json<AnimalRecord>, AppError> {
    peek_animal(&state, Species::Dog).await
}

/// DELETE /api/cat - 猫の引き渡し
pub async fn adopt_cat(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    adopt_animal(&state, Species::Cat).await
}

/// DELETE /api/dog - 犬の引き渡し
pub async fn adopt_dog(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    adopt_animal(&state, Species::Dog).await
}

/// POST /api/cat - 猫の新規登録
pub async fn add_cat(
    State(state): State<AppState>,
    payload: Result<Json<NewAnimalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnimalRecord>), AppError> {
    add_animal(&state, Species::Cat, payload).await
}

/// POST /api/dog - 犬の新規登録
pub async fn add_dog(
    State(state): State<AppState>,
    payload: Result<Json<NewAnimalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnimalRecord>), AppError> {
    add_animal(&state, Species::Dog, payload).await
}

/// GET /api/oldest - 両シェルターの先頭のうち最も長く待っている動物
pub async fn get_oldest(
    State(state): State<AppState>,
) -> Result<Json<OldestAnimalResponse>, AppError> {
    let (species, animal) = state.registry.oldest().await?;
    Ok(Json(OldestAnimalResponse { species, animal }))
}
