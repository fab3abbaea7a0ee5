//! Employee table operations.

use crate::{DbError, DbPool};

/// Insert an employee and bump the population counter of their department,
/// inside one transaction.
///
/// The population update is a single atomic `SET dept_populus =
/// dept_populus + 1`, so concurrent hires into the same department cannot
/// lose increments.  Departments are matched by name; a typo'd name updates
/// nothing and the hire still succeeds.
///
/// Returns the new `employees.id`.
pub async fn hire_employee(
    pool: &DbPool,
    name: &str,
    skills: &str,
    pay: f32,
    department: &str,
    level: i32,
) -> Result<i64, DbError> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE dept SET dept_populus = dept_populus + 1 WHERE dept_name = $1")
        .bind(department)
        .execute(&mut *tx)
        .await?;

    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO employees (name, skills, pay, department, level)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(skills)
    .bind(pay)
    .bind(department)
    .bind(level)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(id)
}

/// Sum `pay` over every employee whose department matches exactly, rounded
/// to two decimals on `numeric` before casting back to `float8`.
///
/// `SUM` over zero rows is NULL, so a missing department and a department
/// with no employees both come back as `None`.
pub async fn sum_pay_by_department(
    pool: &DbPool,
    department: &str,
) -> Result<Option<f64>, DbError> {
    let total = sqlx::query_scalar::<_, Option<f64>>(
        "SELECT ROUND(SUM(pay)::numeric, 2)::float8 FROM employees WHERE department = $1",
    )
    .bind(department)
    .fetch_one(pool)
    .await?;

    Ok(total)
}
