//! Opaque API-key gate.
//!
//! Every route requires the configured key, supplied either as an
//! `access_token` header or an `access_token` query parameter.  The key is
//! compared for string equality; issuing and rotating keys is not handled
//! here.

use std::collections::HashMap;

use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::handlers::ErrorDetail;
use crate::AppState;

/// Header and query-parameter name carrying the key.
pub const TOKEN_PARAM: &str = "access_token";

/// Middleware: pass the request through only with a valid key.
pub async fn require_api_key(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Response {
    let header_token = request
        .headers()
        .get(TOKEN_PARAM)
        .and_then(|value| value.to_str().ok());
    let token = header_token.or_else(|| params.get(TOKEN_PARAM).map(String::as_str));

    match token {
        Some(token) if token == state.api_key => next.run(request).await,
        _ => {
            warn!(uri = %request.uri(), "rejected request without a valid API key");
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDetail::new("Invalid or missing API key")),
            )
                .into_response()
        }
    }
}
