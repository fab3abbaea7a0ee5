//! Department operations behind the HTTP endpoints.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use db::models::HistoryEntryRow;
use db::repository::{departments as dept_repo, employees as emp_repo, history as history_repo};
use db::DbPool;

use crate::ServiceError;

/// Confirmation payload for a created department, echoing the input.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentCreated {
    pub dept_name: String,
    pub base_pay: f64,
}

/// Total pay across the current employees of one department.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPay {
    pub department: String,
    pub total_pay: f64,
}

/// Aggregate wages paid out by one department over the whole history ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTotal {
    pub department: String,
    pub total_paid: f64,
}

/// One employee's merged tenure within a department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeTenure {
    pub emp_id: i64,
    pub emp_name: String,
    pub days_employed: i64,
    pub day_wage: f64,
}

/// Create a department with a population of zero.
///
/// Rejects a negative base pay before any statement is issued.  Duplicate
/// names are allowed and produce separate rows.
pub async fn create_department(
    pool: &DbPool,
    dept_name: &str,
    base_pay: f64,
) -> Result<DepartmentCreated, ServiceError> {
    if base_pay < 0.0 {
        return Err(ServiceError::InvalidArgument(
            "dept_basePay can't be a negative number".to_string(),
        ));
    }

    info!(dept_name, base_pay, "adding department");
    let row = dept_repo::insert_department(pool, dept_name, base_pay).await?;
    info!(dept_id = row.dept_id, "department added");

    Ok(DepartmentCreated {
        dept_name: dept_name.to_string(),
        base_pay,
    })
}

/// Total pay over all employees whose department matches exactly.
///
/// A department with no matching employees and a department that does not
/// exist are indistinguishable: both surface as `NotFound`.
pub async fn total_department_pay(
    pool: &DbPool,
    department_name: &str,
) -> Result<DailyPay, ServiceError> {
    let total = emp_repo::sum_pay_by_department(pool, department_name).await?;

    let total_pay = total.ok_or_else(|| {
        ServiceError::NotFound(
            "Department not found or no employees in the department".to_string(),
        )
    })?;

    info!(department = department_name, total_pay, "computed department pay");
    Ok(DailyPay {
        department: department_name.to_string(),
        total_pay,
    })
}

/// `sum(days_employed * day_wage)` per distinct department in the ledger,
/// each aggregate rounded to two decimals.
///
/// Departments with no history rows do not appear; an empty ledger is
/// `NotFound`.
pub async fn total_paid_by_department(
    pool: &DbPool,
) -> Result<Vec<DepartmentTotal>, ServiceError> {
    let rows = history_repo::totals_by_department(pool).await?;

    if rows.is_empty() {
        return Err(ServiceError::NotFound("No history records found".to_string()));
    }

    let totals = rows
        .into_iter()
        .map(|row| DepartmentTotal {
            department: row.department,
            total_paid: round2(row.total_paid),
        })
        .collect();

    Ok(totals)
}

/// Employment history of a department, merged to one record per employee.
pub async fn department_history(
    pool: &DbPool,
    department_name: &str,
) -> Result<Vec<EmployeeTenure>, ServiceError> {
    let rows = history_repo::rows_for_department(pool, department_name).await?;

    if rows.is_empty() {
        return Err(ServiceError::NotFound(
            "No history records found for the specified department".to_string(),
        ));
    }

    info!(department = department_name, rows = rows.len(), "merging employment history");
    Ok(merge_history(rows))
}

/// Collapse raw history rows into one record per employee.
///
/// The first row seen for an `emp_id` fixes `emp_name` and `day_wage`;
/// later rows with the same `emp_id` only add their `days_employed`.  A wage
/// that differs across tenures keeps its first-seen value.  Output order is
/// first-seen order.
pub(crate) fn merge_history(rows: Vec<HistoryEntryRow>) -> Vec<EmployeeTenure> {
    let mut merged: Vec<EmployeeTenure> = Vec::new();
    let mut index_by_emp: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        match index_by_emp.entry(row.emp_id) {
            Entry::Occupied(seen) => merged[*seen.get()].days_employed += row.days_employed,
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(EmployeeTenure {
                    emp_id: row.emp_id,
                    emp_name: row.emp_name,
                    days_employed: row.days_employed,
                    day_wage: row.day_wage,
                });
            }
        }
    }

    merged
}

/// Round to two decimals, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
