use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

use crate::infra::config::AppConfig;

// Writers queue on the database lock instead of failing fast.
const BUSY_TIMEOUT_SECS: u64 = 10;

pub async fn init_db(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(config.db.url.as_str())?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

    // In-memory databases live as long as their connection.
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db.max_connections as u32)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    info!("Connected to database!");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations applied");
    Ok(pool)
}
