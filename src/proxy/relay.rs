//! Upstream response relay.

use axum::body::Body;
use axum::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderMap;
use axum::response::Response;

/// Connection-scoped headers owned by this server's own HTTP stack; never
/// copied from the upstream response.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Copy an upstream response into an outbound one.
///
/// The status code is copied verbatim and the body is streamed through
/// without buffering, so arbitrary-length media segments relay in constant
/// memory. All end-to-end upstream headers are preserved, then the three
/// CORS permission headers are forced on, replacing any upstream values.
pub fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();

    let mut headers = HeaderMap::with_capacity(upstream.headers().len() + 3);
    for (name, value) in upstream.headers() {
        if HOP_BY_HOP.contains(&name.as_str()) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
