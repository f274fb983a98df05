//! Animal Shelter Common Library
//!
//! シェルターサーバーとクライアントで共有する型・プロトコル・設定

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型
pub mod error;

/// HTTP APIのリクエスト/レスポンス定義
pub mod protocol;

/// 動物レコード等のコアデータ型
pub mod types;
