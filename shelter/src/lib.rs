//! Animal Shelter Server
//!
//! 猫・犬の2つのシェルターを到着順のキューで管理するREST APIサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 動物キュー（FIFO）
pub mod queue;

/// シェルター管理
pub mod registry;

/// 初期データ
pub mod seed;

/// サーバー起動・シャットダウン
pub mod server;

use animal_shelter_common::config::ServerConfig;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// シェルターレジストリ
    pub registry: registry::ShelterRegistry,
    /// サーバー設定
    pub config: ServerConfig,
}
