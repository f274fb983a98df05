//! ロギング初期化
//!
//! `RUST_LOG` でフィルタ可能な tracing サブスクライバを設定する。
//! 出力は tracing-appender のノンブロッキングライタ経由で標準出力へ流す。

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// `RUST_LOG` 未設定時のフィルタ
///
/// `TraceLayer` のリクエストログは DEBUG で出るため `tower_http` だけ引き上げる。
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// ロギングを初期化する
///
/// 返された [`WorkerGuard`] がドロップされるとバッファがフラッシュされるため、
/// プロセス終了まで保持すること。
pub fn init() -> Result<WorkerGuard, TryInitError> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true).with_writer(writer))
        .try_init()?;

    Ok(guard)
}
