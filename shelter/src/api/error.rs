//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use animal_shelter_common::{
    error::{CommonError, ShelterError},
    protocol::ErrorResponse,
};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ShelterError);

impl From<ShelterError> for AppError {
    fn from(err: ShelterError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(ShelterError::Common(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ShelterError::Common(CommonError::Validation(
            rejection.body_text(),
        )))
    }
}

impl AppError {
    /// HTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ShelterError::Common(CommonError::Validation(_)) => StatusCode::BAD_REQUEST,
            ShelterError::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ShelterError::EmptyShelter(_) => StatusCode::NOT_FOUND,
            ShelterError::NoAnimalsAvailable => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Request rejected: {}", self.0);
        }

        let payload = ErrorResponse {
            error: self.0.to_string(),
        };

        (status, Json(payload)).into_response()
    }
}
