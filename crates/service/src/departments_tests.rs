//! Unit tests for department logic that runs without Postgres.
//!
//! The negative-base-pay case uses a lazily-connected pool: validation
//! rejects the input before any statement is issued, so no database is
//! needed.  Paths that execute SQL are exercised against a live database
//! separately.

use db::models::HistoryEntryRow;
use db::DbPool;

use crate::departments::{create_department, merge_history, round2, EmployeeTenure};
use crate::ServiceError;

fn lazy_pool() -> DbPool {
    DbPool::connect_lazy("postgres://localhost/unreachable").expect("lazy pool")
}

fn row(emp_id: i64, emp_name: &str, days_employed: i64, day_wage: f64) -> HistoryEntryRow {
    HistoryEntryRow {
        emp_id,
        emp_name: emp_name.to_string(),
        days_employed,
        day_wage,
    }
}

#[tokio::test]
async fn negative_base_pay_is_rejected_before_any_query() {
    let pool = lazy_pool();
    let err = create_department(&pool, "Night Shift", -1.0)
        .await
        .unwrap_err();

    match err {
        ServiceError::InvalidArgument(msg) => {
            assert_eq!(msg, "dept_basePay can't be a negative number");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_base_pay_is_a_valid_input() {
    // Zero passes validation and proceeds to the insert, which fails on the
    // unreachable pool — anything but InvalidArgument proves the rule is
    // strictly `< 0`.
    let pool = lazy_pool();
    let err = create_department(&pool, "Interns", 0.0).await.unwrap_err();
    assert!(matches!(err, ServiceError::Database(_)), "got {err:?}");
}

#[test]
fn merge_sums_days_for_a_repeated_employee() {
    let merged = merge_history(vec![
        row(1, "X", 10, 5.0),
        row(1, "X", 20, 9.0),
    ]);

    assert_eq!(
        merged,
        vec![EmployeeTenure {
            emp_id: 1,
            emp_name: "X".to_string(),
            days_employed: 30,
            day_wage: 5.0,
        }]
    );
}

#[test]
fn merge_keeps_the_first_seen_wage() {
    let merged = merge_history(vec![
        row(4, "Ada", 100, 12.5),
        row(4, "Ada", 1, 99.0),
        row(4, "Ada", 1, 0.25),
    ]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].day_wage, 12.5);
    assert_eq!(merged[0].days_employed, 102);
}

#[test]
fn merge_preserves_first_seen_order() {
    let merged = merge_history(vec![
        row(7, "G", 1, 1.0),
        row(3, "H", 2, 2.0),
        row(7, "G", 3, 1.0),
        row(5, "I", 4, 3.0),
    ]);

    let ids: Vec<i64> = merged.iter().map(|t| t.emp_id).collect();
    assert_eq!(ids, vec![7, 3, 5]);
}

#[test]
fn merge_leaves_distinct_employees_untouched() {
    let merged = merge_history(vec![
        row(1, "A", 10, 5.0),
        row(2, "B", 20, 6.0),
    ]);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].days_employed, 10);
    assert_eq!(merged[1].days_employed, 20);
}

#[test]
fn round2_rounds_to_cents() {
    assert_eq!(round2(123.456), 123.46);
    assert_eq!(round2(10.0 / 3.0), 3.33);
    assert_eq!(round2(150.0), 150.0);
}

#[test]
fn round2_rounds_half_away_from_zero() {
    // 0.125 is exactly representable, so the .5 boundary is real here.
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(-0.125), -0.13);
}
