//! Row structs decoded from query results.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Response shaping lives in the `service` crate.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A department row as stored in `dept`.
///
/// `dept_name`, `base_pay` and `dept_populus` are nullable in the schema, so
/// they decode as `Option` even though the application always writes them.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DeptRow {
    pub dept_id: i64,
    pub created_at: DateTime<Utc>,
    pub dept_name: Option<String>,
    pub base_pay: Option<f64>,
    pub dept_populus: Option<i32>,
}

/// One employment-history row scoped to a department lookup.
///
/// Only the columns the history endpoint reads; `ledger_id`, `created_at`
/// and `in_dept` are never decoded.
#[derive(Debug, Clone, FromRow)]
pub struct HistoryEntryRow {
    pub emp_id: i64,
    pub emp_name: String,
    pub days_employed: i64,
    pub day_wage: f64,
}

/// One `GROUP BY in_dept` aggregate from the history table.
#[derive(Debug, Clone, FromRow)]
pub struct DeptTotalRow {
    pub department: String,
    pub total_paid: f64,
}
