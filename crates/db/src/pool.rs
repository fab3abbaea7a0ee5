//! Postgres connection pool construction.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Shared Postgres pool handed down from `main` to every layer.
///
/// There is deliberately no process-global pool; callers construct one and
/// pass it where it is needed.
pub type DbPool = PgPool;

/// Connect to Postgres and build a pool capped at `max_connections`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!(max_connections, "connecting to Postgres");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply pending SQLx migrations embedded from the workspace `migrations/`
/// directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("applying database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
