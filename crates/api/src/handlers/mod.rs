//! Request handlers grouped by resource.

pub mod departments;

use serde::Serialize;

/// Failure body carried by 4xx/5xx responses: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
