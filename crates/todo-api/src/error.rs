use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::ErrorResponse;
use infrastructure::StoreError;
use thiserror::Error;

/// ハンドラで発生しうるエラー
///
/// どちらも 500 `{"error": "<message>"}` に変換される（入力の検証層は持たない）。
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    MalformedBody(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
