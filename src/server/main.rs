use prk_taskapi::adapters::{AppState, HttpServer};
use prk_taskapi::config::Config;
use prk_taskapi::storage::sqlite::SqliteTaskStore;
use prk_taskapi::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(&config);
    tracing::debug!(env = ?config.app_env, log_level = %config.log_level, "Configuration loaded");

    let store = SqliteTaskStore::connect(&config.database_url).await?;
    let server = HttpServer::new(AppState::new(store), &config).await?;
    server.run().await?;
    Ok(())
}
