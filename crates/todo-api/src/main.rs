//! todo-api バイナリのエントリポイント

use anyhow::Context;
use infrastructure::SqliteTodoRepository;
use shared::ApiConfig;
use todo_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    shared::init_tracing(config.log_format).map_err(|e| anyhow::anyhow!(e))?;

    let pool = infrastructure::connect(&config.database_url)
        .await
        .context("failed to open database")?;
    let state = AppState::with_repository(SqliteTodoRepository::new(pool));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server starting");

    axum::serve(listener, app(state))
        .await
        .context("server error")?;
    Ok(())
}
