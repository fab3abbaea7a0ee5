//! Department table operations.

use crate::models::DeptRow;
use crate::{DbError, DbPool};

/// Insert a new department with a population of zero.
///
/// There is no duplicate check: inserting the same name twice produces two
/// rows, matching the unconstrained schema.
pub async fn insert_department(
    pool: &DbPool,
    dept_name: &str,
    base_pay: f64,
) -> Result<DeptRow, DbError> {
    let row = sqlx::query_as::<_, DeptRow>(
        r#"
        INSERT INTO dept (dept_name, base_pay, dept_populus)
        VALUES ($1, $2, 0)
        RETURNING dept_id, created_at, dept_name, base_pay, dept_populus
        "#,
    )
    .bind(dept_name)
    .bind(base_pay)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
