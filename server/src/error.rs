use api::models::ErrorBody;
use api::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Everything a handler can fail with, mapped onto the app's error
/// contract: 400 for input shape, 401 for a missing session, upstream
/// failures verbatim, anything unexpected a generic 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown role tag: {0}")]
    UnknownRole(String),

    #[error("authentication token missing")]
    NoSession,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingToken => AppError::NoSession,
            ApiError::Upstream { status, message } => AppError::Upstream { status, message },
            ApiError::Http(err) => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingField(_) | AppError::UnknownRole(_) => StatusCode::BAD_REQUEST,
            AppError::NoSession => StatusCode::UNAUTHORIZED,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Internal(diagnostic) => {
                tracing::error!(error = %diagnostic, "request failed unexpectedly");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = match self {
            // The diagnostic goes to the log, not to the browser.
            AppError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
