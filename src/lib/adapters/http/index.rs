use axum::{Json, Router, routing::get};

use crate::core::MessageBody;

use super::app::AppState;

pub const INDEX_MESSAGE: &str = "Task API";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Index",
    responses(
        (status = 200, description = "Task API Index", body = MessageBody),
    )
)]
pub async fn index() -> Json<MessageBody> {
    Json(MessageBody::new(INDEX_MESSAGE))
}
