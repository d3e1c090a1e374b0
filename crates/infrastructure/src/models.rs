use chrono::{DateTime, Utc};
use domain::{Todo, TodoId};
use sqlx::FromRow;

/// todos テーブルの 1 行
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::new(row.id),
            title: row.title,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}
