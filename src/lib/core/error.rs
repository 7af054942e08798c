use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::schema::{ValidationError, ValidationErrorBody};

pub const NOT_FOUND: &str = "Not Found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const MALFORMED_JSON: &str = "Malformed JSON in request body";
pub const UNSUPPORTED_MEDIA_TYPE: &str = "Expected request with `Content-Type: application/json`";

#[derive(Error, Debug)]
pub enum TaskApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Not Found")]
    NotFound,
    #[error("Malformed JSON in request body")]
    MalformedJson,
    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,
    #[error("Request body rejected ({status}): {message}")]
    BodyRejected { status: StatusCode, message: String },
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Flat `{ "message": ... }` body used by 404s and generic failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Not Found")]
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for TaskApiError {
    fn into_response(self) -> Response {
        match self {
            TaskApiError::Validation(error) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorBody::from(error)),
            )
                .into_response(),
            TaskApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(MessageBody::new(NOT_FOUND))).into_response()
            }
            TaskApiError::MalformedJson => {
                (StatusCode::BAD_REQUEST, Json(MessageBody::new(MALFORMED_JSON))).into_response()
            }
            TaskApiError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(MessageBody::new(UNSUPPORTED_MEDIA_TYPE)),
            )
                .into_response(),
            TaskApiError::BodyRejected { status, message } => {
                (status, Json(MessageBody::new(message))).into_response()
            }
            TaskApiError::Storage(ref error) => {
                tracing::error!(error = ?error, "Unhandled storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody::new(INTERNAL_SERVER_ERROR)),
                )
                    .into_response()
            }
        }
    }
}
