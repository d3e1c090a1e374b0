//! HTTP API（axum）
//!
//! `todos` テーブルへの単純な CRUD を提供します。
//! 各リクエストはちょうど 1 つの SQL 文に対応し、業務ロジックは持ちません。

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use infrastructure::{SqliteTodoRepository, TodoStore};
use std::sync::Arc;

pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// SQLite リポジトリを注入した状態を作る
    pub fn with_repository(repo: SqliteTodoRepository) -> Self {
        Self::new(Arc::new(repo))
    }

    pub(crate) fn store(&self) -> &dyn TodoStore {
        self.store.as_ref()
    }
}

/// ルータを構築して返します。
///
/// - 既知のパスでも未対応メソッドは 405 ではなく 404 `Not Found`
/// - OPTIONS と CORS ヘッダはミドルウェアで一括処理
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .fallback(router::not_found),
        )
        .route(
            "/api/todos/:id",
            put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .fallback(router::not_found),
        )
        .route(
            "/api/todos/",
            put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .fallback(router::not_found),
        )
        .fallback(router::not_found)
        .layer(middleware::from_fn(router::cors))
        .with_state(state)
}
