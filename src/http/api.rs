//! Configuration-exposure endpoint.
//!
//! The browser client bootstraps itself by asking the gateway for its
//! access password; `/api/env` hands back the configured value as JSON.
//! Unlike proxy failures, this endpoint speaks a structured payload.

use axum::extract::State;
use axum::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::server::AppState;

/// `GET /api/env` — the password the client-side UI gates itself on.
pub async fn env_handler(State(state): State<AppState>) -> Response {
    let mut response = Json(json!({
        "PASSWORD": state.config.api.password,
    }))
    .into_response();

    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

/// Any other `/api/...` path.
pub async fn api_not_found() -> Response {
    (StatusCode::NOT_FOUND, "API endpoint not found").into_response()
}
