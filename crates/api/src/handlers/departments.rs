//! Department endpoint handlers.
//!
//! Thin layer: parse query parameters, call the service, map results and
//! errors onto status codes and response bodies.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use service::departments as dept_service;
use service::departments::{DepartmentTotal, EmployeeTenure};
use service::ServiceError;

use super::ErrorDetail;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NewDepartmentParams {
    pub dept_name: String,
    #[serde(rename = "dept_basePay")]
    pub dept_base_pay: f64,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentNameParams {
    pub department_name: String,
}

#[derive(Debug, Serialize)]
struct StatusMessage {
    status: String,
}

#[derive(Debug, Serialize)]
struct ValidationError {
    error: String,
}

#[derive(Debug, Serialize)]
struct TotalPaidResponse {
    status: &'static str,
    total_paid_by_department: Vec<DepartmentTotal>,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    status: &'static str,
    department_history: Vec<EmployeeTenure>,
}

/// POST /departments/new
///
/// A failed validation keeps the 200 status and answers with an
/// `{"error": …}` body; existing clients depend on that shape.
pub async fn add_new_department(
    State(state): State<AppState>,
    Query(params): Query<NewDepartmentParams>,
) -> Response {
    match dept_service::create_department(&state.pool, &params.dept_name, params.dept_base_pay)
        .await
    {
        Ok(created) => Json(StatusMessage {
            status: format!(
                "Successfully added new department named {} with a base pay of ${}",
                created.dept_name, created.base_pay
            ),
        })
        .into_response(),
        Err(ServiceError::InvalidArgument(error)) => {
            Json(ValidationError { error }).into_response()
        }
        Err(err) => internal_error(err, "internal server error"),
    }
}

/// GET /departments/daily_pay
pub async fn daily_pay(
    State(state): State<AppState>,
    Query(params): Query<DepartmentNameParams>,
) -> Response {
    match dept_service::total_department_pay(&state.pool, &params.department_name).await {
        Ok(pay) => Json(pay).into_response(),
        Err(ServiceError::NotFound(detail)) => not_found(detail),
        Err(err) => internal_error(err, "internal server error"),
    }
}

/// POST /departments/total_paid
///
/// Data-access failures surface as one fixed generic message; the underlying
/// error is logged, never returned.
pub async fn total_paid(State(state): State<AppState>) -> Response {
    match dept_service::total_paid_by_department(&state.pool).await {
        Ok(totals) => Json(TotalPaidResponse {
            status: "OK",
            total_paid_by_department: totals,
        })
        .into_response(),
        Err(ServiceError::NotFound(detail)) => not_found(detail),
        Err(err) => internal_error(
            err,
            "An error occurred while calculating the total paid by department",
        ),
    }
}

/// GET /departments/history
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<DepartmentNameParams>,
) -> Response {
    match dept_service::department_history(&state.pool, &params.department_name).await {
        Ok(records) => Json(HistoryResponse {
            status: "OK",
            department_history: records,
        })
        .into_response(),
        Err(ServiceError::NotFound(detail)) => not_found(detail),
        Err(err) => internal_error(err, "internal server error"),
    }
}

fn not_found(detail: String) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorDetail { detail })).into_response()
}

fn internal_error(err: ServiceError, detail: &str) -> Response {
    error!(error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDetail::new(detail))).into_response()
}
