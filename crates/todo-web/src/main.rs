//! todo-web バイナリのエントリポイント

use anyhow::Context;
use shared::WebConfig;
use std::sync::Arc;
use todo_web::{app, HttpTodoApi, PageRenderer, TodoView, WebState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WebConfig::from_env()?;
    shared::init_tracing(config.log_format).map_err(|e| anyhow::anyhow!(e))?;

    let api = HttpTodoApi::new(config.api_url.clone());
    let view = Arc::new(TodoView::new(Arc::new(api)));
    let state = WebState::new(view, PageRenderer::new()?);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, api_url = %config.api_url, "web ui starting");

    axum::serve(listener, app(state))
        .await
        .context("server error")?;
    Ok(())
}
