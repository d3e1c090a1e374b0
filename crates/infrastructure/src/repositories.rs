use crate::{StoreError, TodoRow};
use async_trait::async_trait;
use domain::{Todo, TodoId};
use sqlx::SqlitePool;
use tracing::debug;

const LIST_TODOS: &str =
    "SELECT id, title, completed, created_at FROM todos ORDER BY created_at DESC, id DESC";
const INSERT_TODO: &str = "INSERT INTO todos (title) VALUES (?)";
const UPDATE_COMPLETED: &str = "UPDATE todos SET completed = ? WHERE id = ?";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?";

/// todos テーブルに対する操作
///
/// 各メソッドはちょうど 1 つの SQL 文を実行する。変更系は影響行数を返し、
/// 該当行が無くてもエラーにはならない。
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// 全件を作成日時の降順で取得
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;
    /// タイトルを指定して 1 行追加（completed=false、ID と作成日時はストアが採番）
    async fn create(&self, title: &str) -> Result<u64, StoreError>;
    /// completed を指定値に更新
    async fn set_completed(&self, id: TodoId, completed: bool) -> Result<u64, StoreError>;
    /// 1 行削除
    async fn delete(&self, id: TodoId) -> Result<u64, StoreError>;
}

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for SqliteTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows: Vec<TodoRow> = sqlx::query_as(LIST_TODOS).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, title: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(INSERT_TODO)
            .bind(title)
            .execute(&self.pool)
            .await?;
        debug!(id = result.last_insert_rowid(), "todo inserted");
        Ok(result.rows_affected())
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> Result<u64, StoreError> {
        let result = sqlx::query(UPDATE_COMPLETED)
            .bind(completed)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        debug!(%id, completed, rows = result.rows_affected(), "todo updated");
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        let result = sqlx::query(DELETE_TODO)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        debug!(%id, rows = result.rows_affected(), "todo deleted");
        Ok(result.rows_affected())
    }
}
