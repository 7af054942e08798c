pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use crate::core::{NewTask, Task, TaskPatch};

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<Task>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Task>>;
    async fn insert(&self, draft: &NewTask) -> anyhow::Result<Task>;
    /// Overwrites only the fields present in `patch`. `None` when no row has `id`.
    async fn update_by_id(&self, id: i64, patch: &TaskPatch) -> anyhow::Result<Option<Task>>;
    /// `true` when a row was removed.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<bool>;
}

pub type SharedStore = Arc<dyn TaskStore>;
