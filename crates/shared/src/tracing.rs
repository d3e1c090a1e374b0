use crate::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// テキスト・JSON 共通の出力レイヤー（ターゲット名は出さない）
fn fmt_layer<S>() -> fmt::Layer<S> {
    fmt::layer().with_target(false)
}

/// トレーシングサブスクライバーを初期化
/// `RUST_LOG` が未設定の場合は `info` レベルで出力する
pub fn init_tracing(format: LogFormat) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        // 構造化ログ（JSON）
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt_layer().json())
            .with(filter)
            .try_init()?,
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt_layer())
            .with(filter)
            .try_init()?,
    }

    Ok(())
}
