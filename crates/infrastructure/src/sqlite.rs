use crate::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// todos テーブル定義
///
/// `created_at` はミリ秒精度の RFC 3339（UTC）文字列で保存する。
const CREATE_TODOS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

/// `database_url` に接続し、テーブルが無ければ作成する
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    ensure_schema(&pool).await?;

    info!(database_url, "connected to sqlite store");
    Ok(pool)
}

/// インメモリ DB（テスト・ローカル確認用）
///
/// `sqlite::memory:` は接続ごとに別 DB になるため、接続は 1 本に固定して使い回す。
pub async fn connect_in_memory() -> Result<SqlitePool, StoreError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// スキーマの初期化（マイグレーションは行わない）
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(CREATE_TODOS_TABLE).execute(pool).await?;
    Ok(())
}
