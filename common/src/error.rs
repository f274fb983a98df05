//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

use crate::types::Species;

/// 共通レイヤーのエラー型
#[derive(Debug, Error)]
pub enum CommonError {
    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(String),

    /// 入力検証エラー
    #[error("Validation error: {0}")]
    Validation(String),
}

/// シェルターサーバーのエラー型
#[derive(Debug, Error)]
pub enum ShelterError {
    /// 共通レイヤーのエラー
    #[error(transparent)]
    Common(#[from] CommonError),

    /// 指定シェルターが空
    #[error("No {} available for adoption", .0.plural())]
    EmptyShelter(Species),

    /// 両シェルターが空
    #[error("No animals available for adoption")]
    NoAnimalsAvailable,
}

/// シェルターサーバーのResult型
pub type ShelterResult<T> = Result<T, ShelterError>;
