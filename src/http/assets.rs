//! Static-asset responder.
//!
//! The gateway ships a single embedded landing document; everything else
//! the browser client needs is served from its own static deployment.
//! Search deep-links (`/s=<query>`) rewrite to the landing document so the
//! client-side router can pick the query up.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Media Gateway</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: #0a0a0a;
            color: white;
            margin: 0;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .container { text-align: center; max-width: 600px; }
        .logo { font-size: 3em; margin-bottom: 20px; }
        .status {
            background: #1a1a1a;
            border: 1px solid #333;
            border-radius: 8px;
            padding: 20px;
            color: #4ade80;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="logo">Media Gateway</div>
        <div class="status">Gateway is up. Proxy endpoint: /proxy/&lt;encoded-url&gt;</div>
    </div>
</body>
</html>
"#;

/// Fallback handler for everything outside `/proxy/` and `/api/`.
pub async fn asset_handler(uri: Uri) -> Response {
    let path = uri.path();

    if path == "/" || path == "/index.html" || path.starts_with("/s=") {
        return (
            [
                (CONTENT_TYPE, "text/html"),
                (CACHE_CONTROL, "public, max-age=3600"),
            ],
            INDEX_HTML,
        )
            .into_response();
    }

    (StatusCode::NOT_FOUND, "File not found").into_response()
}
