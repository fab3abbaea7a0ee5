//! Employment-history ledger operations.

use crate::models::{DeptTotalRow, HistoryEntryRow};
use crate::{DbError, DbPool};

/// Append one tenure segment to the history ledger.
///
/// `emp_id` is whatever the caller says it is — the ledger does not check it
/// against `employees.id`.
pub async fn insert_history(
    pool: &DbPool,
    emp_name: &str,
    days_employed: i64,
    day_wage: f64,
    in_dept: &str,
    emp_id: i64,
) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO history (emp_name, days_employed, day_wage, in_dept, emp_id)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(emp_name)
    .bind(days_employed)
    .bind(day_wage)
    .bind(in_dept)
    .bind(emp_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Every history row tagged with the given department, in natural row order.
///
/// No ORDER BY: downstream merging is defined in terms of first-seen order
/// among whatever rows come back.
pub async fn rows_for_department(
    pool: &DbPool,
    department: &str,
) -> Result<Vec<HistoryEntryRow>, DbError> {
    let rows = sqlx::query_as::<_, HistoryEntryRow>(
        "SELECT emp_id, emp_name, days_employed, day_wage FROM history WHERE in_dept = $1",
    )
    .bind(department)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// `sum(days_employed * day_wage)` grouped by department, one row per
/// distinct department present in the ledger.
pub async fn totals_by_department(pool: &DbPool) -> Result<Vec<DeptTotalRow>, DbError> {
    let rows = sqlx::query_as::<_, DeptTotalRow>(
        r#"
        SELECT in_dept AS department, SUM(days_employed * day_wage) AS total_paid
        FROM history
        GROUP BY in_dept
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
