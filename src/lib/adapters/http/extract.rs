use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde_json::Value;

use crate::core::{Issue, Schema, TaskApiError, ValidationError};

/// The `{id}` path segment, parsed as an integer before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for TaskId {
    type Rejection = TaskApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => {
                // the route always has `{id}`, so this is an undecodable segment
                tracing::debug!(error = %rejection, "Unreadable id path parameter");
                return Err(invalid_id("nan").into());
            }
        };
        parse_id(&raw).map(TaskId).map_err(TaskApiError::from)
    }
}

/// Coerces a path segment to an integer id the way a numeric coercion would:
/// `1e3` and `1.0` are whole numbers, other fractions read as `float`, and
/// anything that is not a number reads as `nan`.
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(id);
    }
    let number = match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => return Err(invalid_id("nan")),
    };
    if number.fract() != 0.0 {
        return Err(ValidationError::single(Issue::invalid_type(
            &["id"],
            "integer",
            "float",
        )));
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if number >= i64::MAX as f64 {
        return Err(ValidationError::single(Issue::too_big_number(&["id"], i64::MAX)));
    }
    if number < i64::MIN as f64 {
        return Err(ValidationError::single(Issue::too_small_number(&["id"], i64::MIN)));
    }
    Ok(number as i64)
}

fn invalid_id(received: &str) -> ValidationError {
    ValidationError::single(Issue::invalid_type(&["id"], "number", received))
}

/// A JSON body checked against `T`'s schema.
///
/// The body must be sent as `application/json`; axum's `Json` rejection
/// decides between 415, 400 and the buffering failures (such as 413).
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Schema,
{
    type Rejection = TaskApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(body_rejection)?;
        T::parse(&value).map(Validated).map_err(TaskApiError::from)
    }
}

fn body_rejection(rejection: JsonRejection) -> TaskApiError {
    tracing::debug!(error = %rejection, "Rejected request body");
    match rejection {
        JsonRejection::MissingJsonContentType(_) => TaskApiError::UnsupportedMediaType,
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            TaskApiError::MalformedJson
        }
        other => TaskApiError::BodyRejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}
