//! Black-box tests of the forwarding path.

use std::net::SocketAddr;

use media_gateway::config::GatewayConfig;

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn relays_upstream_bytes_and_forces_cors() {
    let upstream_addr: SocketAddr = "127.0.0.1:18182".parse().unwrap();
    let gateway_addr: SocketAddr = "127.0.0.1:18181".parse().unwrap();

    // Transport-stream magic plus non-UTF8 bytes; relays must not touch them.
    const SEGMENT: &[u8] = &[0x47, 0x40, 0x11, 0x10, 0x00, 0xfe, 0xff, 0x21];
    common::start_mock_upstream(
        upstream_addr,
        "200 OK",
        &[
            ("Content-Type", "video/mp2t"),
            ("Access-Control-Allow-Origin", "https://evil.example"),
            ("X-Upstream-Tag", "edge-7"),
        ],
        SEGMENT,
    )
    .await;
    common::start_gateway(gateway_addr, GatewayConfig::default()).await;

    let target = format!("http://{upstream_addr}/a.ts");
    let url = format!("http://{gateway_addr}/proxy/{}", common::encode(&target));

    let first = client().get(&url).send().await.unwrap();
    assert_eq!(first.status(), 200);
    // forced CORS headers win over the upstream's own
    assert_eq!(first.headers()["access-control-allow-origin"], "*");
    assert_eq!(
        first.headers()["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        first.headers()["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
    // ordinary upstream headers pass through
    assert_eq!(first.headers()["content-type"], "video/mp2t");
    assert_eq!(first.headers()["x-upstream-tag"], "edge-7");

    let first_body = first.bytes().await.unwrap();
    assert_eq!(&first_body[..], SEGMENT);

    // idempotent upstream, identical second read
    let second = client().get(&url).send().await.unwrap();
    assert_eq!(second.bytes().await.unwrap(), first_body);
}

#[tokio::test]
async fn missing_target_is_rejected() {
    let gateway_addr: SocketAddr = "127.0.0.1:18281".parse().unwrap();
    common::start_gateway(gateway_addr, GatewayConfig::default()).await;

    let response = client()
        .get(format!("http://{gateway_addr}/proxy/"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Invalid proxy URL");
}

#[tokio::test]
async fn non_http_scheme_is_rejected() {
    let gateway_addr: SocketAddr = "127.0.0.1:18381".parse().unwrap();
    common::start_gateway(gateway_addr, GatewayConfig::default()).await;

    let response = client()
        .get(format!("http://{gateway_addr}/proxy/ftp%3A%2F%2Fx.com%2Ff"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Invalid proxy URL");
}

#[tokio::test]
async fn unreachable_upstream_is_a_proxy_error() {
    let gateway_addr: SocketAddr = "127.0.0.1:18481".parse().unwrap();
    common::start_gateway(gateway_addr, GatewayConfig::default()).await;

    // 18499 is never bound by any test; connecting is refused immediately.
    let target = "http://127.0.0.1:18499/a.ts";
    let response = client()
        .get(format!(
            "http://{gateway_addr}/proxy/{}",
            common::encode(target)
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body = response.text().await.unwrap();
    assert!(body.starts_with("Proxy error: "), "unexpected body: {body}");
}

#[tokio::test]
async fn impersonation_headers_replace_client_headers() {
    let upstream_addr: SocketAddr = "127.0.0.1:18582".parse().unwrap();
    let gateway_addr: SocketAddr = "127.0.0.1:18581".parse().unwrap();

    let recorded = common::start_recording_upstream(upstream_addr, "#EXTM3U").await;
    common::start_gateway(gateway_addr, GatewayConfig::default()).await;

    let target = format!("http://{upstream_addr}/live/index.m3u8");
    client()
        .get(format!(
            "http://{gateway_addr}/proxy/{}",
            common::encode(&target)
        ))
        .header("Cookie", "session=1")
        .header("Authorization", "Bearer token")
        .header("Referer", "https://client.example/watch")
        .header("X-Custom", "1")
        .send()
        .await
        .unwrap();

    let recorded = recorded.lock().await;
    let head = recorded[0].to_lowercase();

    assert!(head.starts_with("get /live/index.m3u8 http/1.1"), "{head}");
    // the fixed impersonation set, nothing else
    assert!(head.contains("user-agent: mozilla/5.0 (windows nt 10.0; win64; x64) applewebkit/537.36"));
    assert!(head.contains("accept: application/json, text/plain, */*"));
    assert!(head.contains(&format!("referer: http://{upstream_addr}")));
    // client identity never crosses over
    assert!(!head.contains("cookie:"));
    assert!(!head.contains("authorization:"));
    assert!(!head.contains("x-custom:"));
    assert!(!head.contains("client.example"));
}

#[tokio::test]
async fn encoded_query_reaches_upstream_intact() {
    let upstream_addr: SocketAddr = "127.0.0.1:18682".parse().unwrap();
    let gateway_addr: SocketAddr = "127.0.0.1:18681".parse().unwrap();

    let recorded = common::start_recording_upstream(upstream_addr, "ok").await;
    common::start_gateway(gateway_addr, GatewayConfig::default()).await;

    let target = format!("http://{upstream_addr}/seg/a.ts?token=abc&n=1");
    let response = client()
        .get(format!(
            "http://{gateway_addr}/proxy/{}",
            common::encode(&target)
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let recorded = recorded.lock().await;
    assert!(
        recorded[0].starts_with("GET /seg/a.ts?token=abc&n=1 HTTP/1.1"),
        "{}",
        recorded[0]
    );
}

#[tokio::test]
async fn method_and_body_pass_through() {
    let upstream_addr: SocketAddr = "127.0.0.1:18782".parse().unwrap();
    let gateway_addr: SocketAddr = "127.0.0.1:18781".parse().unwrap();

    let recorded = common::start_recording_upstream(upstream_addr, "created").await;
    common::start_gateway(gateway_addr, GatewayConfig::default()).await;

    let target = format!("http://{upstream_addr}/echo");
    let response = client()
        .post(format!(
            "http://{gateway_addr}/proxy/{}",
            common::encode(&target)
        ))
        .body("ping")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "created");

    let recorded = recorded.lock().await;
    assert!(recorded[0].starts_with("POST /echo HTTP/1.1"), "{}", recorded[0]);
    assert!(recorded[0].contains("ping"), "{}", recorded[0]);
}
