//! ブラウザ向けのページ配信（axum）
//!
//! 各フォーム送信はビューの操作を 1 回呼び出し、303 で `/` に戻す。

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use domain::TodoId;
use serde::Deserialize;
use std::sync::Arc;

use crate::{render::PageRenderer, view::TodoView};

/// ページ配信の共有状態
#[derive(Clone)]
pub struct WebState {
    view: Arc<TodoView>,
    renderer: Arc<PageRenderer>,
}

impl WebState {
    pub fn new(view: Arc<TodoView>, renderer: PageRenderer) -> Self {
        Self {
            view,
            renderer: Arc::new(renderer),
        }
    }
}

pub fn app(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/todos", post(add_todo))
        .route("/todos/:id/toggle", post(toggle_todo))
        .route("/todos/:id/delete", post(delete_todo))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct NewTodoForm {
    #[serde(default)]
    title: String,
}

/// チェックボックス操作時の表示中の値
#[derive(Debug, Deserialize)]
struct ToggleForm {
    completed: bool,
}

/// GET / （一覧取得が成功するまでは取得し直してから描画）
async fn index(State(state): State<WebState>) -> Response {
    state.view.mount().await;

    let snapshot = state.view.snapshot().await;
    match state.renderer.render(&snapshot) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// POST /todos
async fn add_todo(State(state): State<WebState>, Form(form): Form<NewTodoForm>) -> Redirect {
    state.view.set_new_todo(form.title).await;
    let outcome = state.view.add_todo().await;
    tracing::debug!(?outcome, "add todo");
    Redirect::to("/")
}

/// POST /todos/{id}/toggle
async fn toggle_todo(
    Path(id): Path<TodoId>,
    State(state): State<WebState>,
    Form(form): Form<ToggleForm>,
) -> Redirect {
    let outcome = state.view.toggle_todo(id, form.completed).await;
    tracing::debug!(?outcome, %id, "toggle todo");
    Redirect::to("/")
}

/// POST /todos/{id}/delete
async fn delete_todo(Path(id): Path<TodoId>, State(state): State<WebState>) -> Redirect {
    let outcome = state.view.delete_todo(id).await;
    tracing::debug!(?outcome, %id, "delete todo");
    Redirect::to("/")
}
