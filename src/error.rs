use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failures of an aggregation run. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Malformed upload date {upload_date:?} for media {media_id} of user {user_id}: missing 'T' separator")]
    MalformedTimestamp {
        user_id: String,
        media_id: i64,
        upload_date: String,
    },

    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode artifact: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serve-time failures. A missing or corrupt artifact is a server error;
/// there is no fallback body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Artifact unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let message = self.to_string();

        tracing::error!(status = %status, error = %message);

        let body = json!({
            "data": null,
            "error": {
                "code": status.as_u16(),
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
