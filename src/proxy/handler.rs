//! Proxy request orchestration.

use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};

use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::proxy::{relay, resolver};

/// Handle one `/proxy/{encoded-target-url}` request.
///
/// Linear state machine: resolve the target, fetch it, relay the response.
/// Each step is terminal on failure — resolution errors become a 400, fetch
/// errors a 500 — and nothing is retried.
pub async fn proxy_handler(State(state): State<AppState>, request: Request) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // The target lives in the raw path; an unencoded query string is not
    // part of it. The router only dispatches /proxy/ paths here.
    let raw_target = request.uri().path().strip_prefix("/proxy/").unwrap_or("");

    let target = match resolver::resolve(raw_target) {
        Ok(target) => target,
        Err(err) => {
            tracing::debug!(
                request_id = %request_id,
                path = %request.uri().path(),
                "Rejected proxy target"
            );
            return err.into_response();
        }
    };

    let method = request.method().clone();
    tracing::debug!(
        request_id = %request_id,
        method = %method,
        target = %target.as_str(),
        "Forwarding to upstream"
    );

    let (parts, body) = request.into_parts();
    let body = has_request_body(&parts.headers).then_some(body);

    let upstream = match state.fetcher.fetch(method, &target, body).await {
        Ok(upstream) => upstream,
        Err(err) => {
            tracing::warn!(
                request_id = %request_id,
                target = %target.as_str(),
                error = %err,
                "Upstream fetch failed"
            );
            return err.into_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        status = %upstream.status(),
        "Relaying upstream response"
    );
    relay::relay(upstream)
}

/// Whether the inbound request announces a body worth streaming upstream.
fn has_request_body(headers: &HeaderMap) -> bool {
    if headers.contains_key(TRANSFER_ENCODING) {
        return true;
    }
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .is_some_and(|len| len > 0)
}
