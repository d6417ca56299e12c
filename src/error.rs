use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be turned into a typed payload.
    #[error("invalid request payload: {0}")]
    InvalidPayload(#[from] JsonRejection),

    #[error("no route for {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(rejection) => rejection.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "Request rejected");

        // Only the canonical reason goes back to the caller.
        let message = status.canonical_reason().unwrap_or("Error");
        (status, Json(json!({ "message": message }))).into_response()
    }
}
