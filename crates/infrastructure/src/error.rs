use thiserror::Error;

/// ストア層のエラー
///
/// メッセージは下位ドライバのものをそのまま使う（API の 500 応答にも載る）。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
