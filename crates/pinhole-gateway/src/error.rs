use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pinhole_core::ShortenerError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("short url not found")]
    NotFound,
    #[error("stored url is not a valid redirect target")]
    InvalidRedirectTarget,
    #[error(transparent)]
    Shortener(ShortenerError),
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        match error {
            ShortenerError::NotFound(_) => AppError::NotFound,
            other => AppError::Shortener(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Short URL not found"),
            AppError::InvalidRedirectTarget => {
                error!(error = %self, "cannot redirect");
                (StatusCode::INTERNAL_SERVER_ERROR, "Stored URL cannot be redirected to")
            }
            AppError::Shortener(ref source) => {
                error!(error = %source, "shortener request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = ErrorResponse {
            detail: detail.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
