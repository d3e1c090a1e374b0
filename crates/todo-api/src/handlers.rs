use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use domain::{CreateTodoRequest, DomainError, MutationResponse, Todo, TodoId, UpdateTodoRequest};
use tracing::debug;

use crate::{error::ApiError, AppState};

/// 変更系は文が実行できれば常に success=true（影響行数 0 でも同じ）
const SUCCESS: MutationResponse = MutationResponse { success: true };

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store().list().await?;
    Ok(Json(todos))
}

/// POST /api/todos
///
/// ボディは生バイトで受け取り自前でデコードする（不正な JSON も 500 として扱うため）。
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MutationResponse>, ApiError> {
    let input: CreateTodoRequest = serde_json::from_slice(&body)?;
    state.store().create(&input.title).await?;
    Ok(Json(SUCCESS))
}

/// `/api/todos/` ではパスパラメータがなく `None` になり、空の ID として扱う
fn parse_id(id: Option<Path<String>>) -> Result<TodoId, DomainError> {
    id.map(|Path(id)| id).unwrap_or_default().parse()
}

/// PUT /api/todos/{id}
pub async fn update_todo(
    id: Option<Path<String>>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MutationResponse>, ApiError> {
    let input: UpdateTodoRequest = serde_json::from_slice(&body)?;
    match parse_id(id) {
        Ok(id) => {
            state.store().set_completed(id, input.completed).await?;
        }
        // 整数でない ID はどの行にも一致しない
        Err(e) => debug!(error = %e, "no row can match"),
    }
    Ok(Json(SUCCESS))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    id: Option<Path<String>>,
    State(state): State<AppState>,
) -> Result<Json<MutationResponse>, ApiError> {
    match parse_id(id) {
        Ok(id) => {
            state.store().delete(id).await?;
        }
        Err(e) => debug!(error = %e, "no row can match"),
    }
    Ok(Json(SUCCESS))
}
