//! The `/tasks` endpoints.
//!
//! Each handler carries its route contract as a `#[utoipa::path]` block: the
//! method, path, inputs and every status it may answer with. `/doc` is built
//! from these blocks, and [`router`] binds the same paths to the same handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::core::{Issue, NewTask, Task, TaskApiError, TaskPatch, ValidationError};

use super::app::AppState;
use super::extract::{TaskId, Validated};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list).post(create))
        .route(
            "/tasks/{id}",
            get(get_one_by_id).patch(patch_by_id).delete(delete_by_id),
        )
}

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "The list of tasks", body = [Task]),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Task>>, TaskApiError> {
    tracing::info!("Listing tasks");
    let tasks = state.store.list_all().await?;
    Ok(Json(tasks))
}

#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body(content = NewTask, description = "The task to create", content_type = "application/json"),
    responses(
        (status = 200, description = "The created task", body = Task),
        (status = 400, description = "Malformed JSON body", body = crate::core::MessageBody),
        (status = 415, description = "Body not sent as application/json", body = crate::core::MessageBody),
        (status = 422, description = "The validation error", body = crate::core::ValidationErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Validated(draft): Validated<NewTask>,
) -> Result<Json<Task>, TaskApiError> {
    let task = state.store.insert(&draft).await?;
    tracing::info!(id = task.id, "Created task");
    Ok(Json(task))
}

#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "The task id")),
    responses(
        (status = 200, description = "The requested task", body = Task),
        (status = 404, description = "The task not found", body = crate::core::MessageBody),
        (status = 422, description = "Invalid ID error", body = crate::core::ValidationErrorBody),
    )
)]
pub async fn get_one_by_id(
    State(state): State<AppState>,
    TaskId(id): TaskId,
) -> Result<Json<Task>, TaskApiError> {
    let task = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(TaskApiError::NotFound)?;
    Ok(Json(task))
}

#[utoipa::path(
    patch,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "The task id")),
    request_body(content = TaskPatch, description = "The task updates", content_type = "application/json"),
    responses(
        (status = 200, description = "The updated task", body = Task),
        (status = 400, description = "Malformed JSON body", body = crate::core::MessageBody),
        (status = 404, description = "The task not found", body = crate::core::MessageBody),
        (status = 415, description = "Body not sent as application/json", body = crate::core::MessageBody),
        (status = 422, description = "The validation error", body = crate::core::ValidationErrorBody),
    )
)]
pub async fn patch_by_id(
    State(state): State<AppState>,
    TaskId(id): TaskId,
    Validated(updates): Validated<TaskPatch>,
) -> Result<Json<Task>, TaskApiError> {
    // `{}` passes the schema; an update with nothing in it is still refused
    if updates.is_empty() {
        return Err(ValidationError::single(Issue::no_updates()).into());
    }
    let task = state
        .store
        .update_by_id(id, &updates)
        .await?
        .ok_or(TaskApiError::NotFound)?;
    tracing::info!(id, "Updated task");
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "The task id")),
    responses(
        (status = 204, description = "The task deleted"),
        (status = 404, description = "The task not found", body = crate::core::MessageBody),
        (status = 422, description = "Invalid ID error", body = crate::core::ValidationErrorBody),
    )
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    TaskId(id): TaskId,
) -> Result<StatusCode, TaskApiError> {
    if !state.store.delete_by_id(id).await? {
        return Err(TaskApiError::NotFound);
    }
    tracing::info!(id, "Deleted task");
    Ok(StatusCode::NO_CONTENT)
}
