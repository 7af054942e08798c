use crate::core::{NewTask, TaskPatch};
use crate::storage::TaskStore;
use crate::storage::sqlite::SqliteTaskStore;

fn draft(name: &str) -> NewTask {
    NewTask {
        name: name.to_string(),
        done: false,
    }
}

#[tokio::test]
async fn insert_assigns_increasing_ids() -> anyhow::Result<()> {
    let store = SqliteTaskStore::new_memory().await?;
    let first = store.insert(&draft("one")).await?;
    let second = store.insert(&draft("two")).await?;
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.list_all().await?, vec![first, second]);
    Ok(())
}

#[tokio::test]
async fn update_overwrites_only_present_fields() -> anyhow::Result<()> {
    let store = SqliteTaskStore::new_memory().await?;
    let task = store.insert(&draft("one")).await?;

    let patch = TaskPatch {
        name: None,
        done: Some(true),
    };
    let updated = store.update_by_id(task.id, &patch).await?.unwrap();
    assert_eq!(updated.name, "one");
    assert!(updated.done);

    assert!(store.update_by_id(99, &patch).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_a_row_existed() -> anyhow::Result<()> {
    let store = SqliteTaskStore::new_memory().await?;
    let task = store.insert(&draft("one")).await?;
    assert!(store.delete_by_id(task.id).await?);
    assert!(!store.delete_by_id(task.id).await?);
    assert!(store.find_by_id(task.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn connect_creates_the_database_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("prk_taskapi_{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite:{}", path.display());

    let store = SqliteTaskStore::connect(&url).await?;
    store.insert(&draft("persisted")).await?;
    store.pool().close().await;

    let reopened = SqliteTaskStore::connect(&url).await?;
    let tasks = reopened.list_all().await?;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "persisted");
    reopened.pool().close().await;

    let _ = std::fs::remove_file(&path);
    Ok(())
}
