use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::core::{NewTask, Task, TaskPatch};
use crate::storage::TaskStore;

#[derive(Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Opens (creating if needed) the database at `database_url` and applies migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url {database_url}"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database {database_url}"))?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database. A single long-lived connection keeps it alive.
    pub async fn new_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open in-memory database")?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::debug!("Task table migrations applied");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn list_all(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>("SELECT id, name, done FROM tasks")
            .fetch_all(&self.pool)
            .await
            .context("failed to list tasks")?;
        Ok(tasks)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>("SELECT id, name, done FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load task {id}"))?;
        Ok(task)
    }

    async fn insert(&self, draft: &NewTask) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (name, done) VALUES (?, ?) RETURNING id, name, done",
        )
        .bind(&draft.name)
        .bind(draft.done)
        .fetch_one(&self.pool)
        .await
        .context("failed to insert task")?;
        Ok(task)
    }

    async fn update_by_id(&self, id: i64, patch: &TaskPatch) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET name = COALESCE(?, name), done = COALESCE(?, done)
             WHERE id = ?
             RETURNING id, name, done",
        )
        .bind(patch.name.as_deref())
        .bind(patch.done)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("failed to update task {id}"))?;
        Ok(task)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete task {id}"))?;
        Ok(result.rows_affected() > 0)
    }
}
