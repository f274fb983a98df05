//! Configuration management via environment variables
//!
//! Reads [`ServerConfig`] from the environment, falling back to the
//! deprecated variable names with a warning log.

use animal_shelter_common::config::{
    default_client_origin, default_host, default_port, ServerConfig,
};

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither variable is set or the value does not parse.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    match get_env_with_fallback(new_name, old_name) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Environment variable '{}' has invalid value '{}', using default",
                new_name,
                raw
            );
            default
        }),
        None => default,
    }
}

/// 環境変数からサーバー設定を読み込む
///
/// | 変数            | 旧名    |
/// |-----------------|---------|
/// | `SHELTER_HOST`  |         |
/// | `SHELTER_PORT`  | `PORT`  |
/// | `CLIENT_ORIGIN` |         |
pub fn server_config_from_env() -> ServerConfig {
    ServerConfig {
        host: std::env::var("SHELTER_HOST").unwrap_or_else(|_| default_host()),
        port: get_env_with_fallback_parse("SHELTER_PORT", "PORT", default_port()),
        client_origin: std::env::var("CLIENT_ORIGIN").unwrap_or_else(|_| default_client_origin()),
    }
}
