use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use seatline_shared::models::api::ErrorResponse;
use seatline_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl AppError {
    /// Status and machine-readable code. Every store error kind gets its own status.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Store(err) => match err {
                StoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
                StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                StoreError::AlreadyExists(_) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
                StoreError::Occupied { .. } => (StatusCode::LOCKED, "SEAT_OCCUPIED"),
                StoreError::InvalidSection(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_SECTION")
                }
                StoreError::Exhausted => (StatusCode::SERVICE_UNAVAILABLE, "EXHAUSTED"),
            },
            AppError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        tracing::warn!(%status, code, "Request rejected");

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}
