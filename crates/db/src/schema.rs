//! Schema management: drop and recreate the three workforce tables.
//!
//! Normal deployments use [`crate::pool::run_migrations`]; this module backs
//! the `reset-schema` path the seeder relies on, which starts from empty
//! tables every run.

use sqlx::Executor;
use tracing::info;

use crate::{DbError, DbPool};

/// Same DDL the initial migration applies.
const CREATE_TABLES: &str = include_str!("../../../migrations/0001_create_tables.sql");

const DROP_TABLES: &str = "
    DROP TABLE IF EXISTS employees;
    DROP TABLE IF EXISTS dept;
    DROP TABLE IF EXISTS history;
";

/// Drop the workforce tables if they exist and recreate them empty.
///
/// Destructive: every row in `dept`, `employees` and `history` is lost.
pub async fn reset(pool: &DbPool) -> Result<(), DbError> {
    info!("dropping and recreating workforce tables");
    pool.execute(DROP_TABLES).await?;
    pool.execute(CREATE_TABLES).await?;
    Ok(())
}
