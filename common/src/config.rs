//! 設定管理
//!
//! ServerConfig等の設定構造体

use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// シェルターサーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORSで許可するクライアントのオリジン (デフォルト: "http://localhost:3000")
    #[serde(default = "default_client_origin")]
    pub client_origin: String,
}

/// デフォルトのホストアドレス
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// デフォルトのポート番号
pub fn default_port() -> u16 {
    8080
}

/// デフォルトのクライアントオリジン
pub fn default_client_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            client_origin: default_client_origin(),
        }
    }
}

impl ServerConfig {
    /// バインドアドレス ("host:port")
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 設定値を検証する
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.host.trim().is_empty() {
            return Err(CommonError::Config("host must not be empty".to_string()));
        }
        if self.host.chars().any(char::is_whitespace) {
            return Err(CommonError::Config(format!(
                "host '{}' must not contain whitespace",
                self.host
            )));
        }
        if self.client_origin.trim().is_empty() {
            return Err(CommonError::Config(
                "client_origin must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
