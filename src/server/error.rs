use crate::bo::FrameworkError;
use crate::store::StoreError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// The request body or query string could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    #[error("invalid translation")]
    Invalid(Vec<String>),

    #[error("missing or invalid API key")]
    Unauthorized,

    #[error("write routes are disabled")]
    Forbidden,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<FrameworkError> for ApiError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::UnknownClass(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Invalid(vec![other.to_string()]),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ApiError::Invalid(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "details": errors }),
            ),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "error": self.to_string() })),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, json!({ "error": self.to_string() })),
            ApiError::Store(StoreError::Incomplete) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            ApiError::Store(e) => {
                error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
