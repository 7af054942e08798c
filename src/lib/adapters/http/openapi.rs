use axum::Json;
use utoipa::OpenApi;

use crate::core::{
    Issue, IssueCode, MessageBody, NewTask, Task, TaskPatch, ValidationError, ValidationErrorBody,
};

use super::{index, tasks};

#[derive(OpenApi)]
#[openapi(
    info(title = "Task API", description = "API for managing tasks"),
    paths(
        index::index,
        tasks::list,
        tasks::create,
        tasks::get_one_by_id,
        tasks::patch_by_id,
        tasks::delete_by_id,
    ),
    components(schemas(
        Task,
        NewTask,
        TaskPatch,
        MessageBody,
        Issue,
        IssueCode,
        ValidationError,
        ValidationErrorBody,
    )),
    tags(
        (name = "Index", description = "Service index"),
        (name = "tasks", description = "Task management"),
    )
)]
pub struct ApiDoc;

/// `GET /doc`
pub async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
