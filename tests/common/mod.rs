//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use media_gateway::config::GatewayConfig;
use media_gateway::http::GatewayServer;

/// Bind and run a gateway on `addr`. The listener is bound before this
/// returns, so requests can be issued immediately.
pub async fn start_gateway(addr: SocketAddr, config: GatewayConfig) {
    let server = GatewayServer::new(config).unwrap();
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
}

/// Percent-encode a target URL the way a browser client does before
/// putting it on the proxy path.
#[allow(dead_code)]
pub fn encode(url: &str) -> String {
    percent_encoding::utf8_percent_encode(url, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// Start a mock upstream that answers every connection with a fixed
/// response. Bodies are raw bytes so media segments can be simulated.
#[allow(dead_code)]
pub async fn start_mock_upstream(
    addr: SocketAddr,
    status_line: &'static str,
    headers: &'static [(&'static str, &'static str)],
    body: &'static [u8],
) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 8192];
                        let _ = socket.read(&mut buf).await;

                        let mut response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
                            status_line,
                            body.len()
                        );
                        for (name, value) in headers {
                            response.push_str(&format!("{name}: {value}\r\n"));
                        }
                        response.push_str("\r\n");

                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.write_all(body).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a mock upstream that records the raw bytes of each request
/// (head and body) before answering 200 with `body`.
#[allow(dead_code)]
pub async fn start_recording_upstream(
    addr: SocketAddr,
    body: &'static str,
) -> Arc<Mutex<Vec<String>>> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let sink = sink.clone();
                    tokio::spawn(async move {
                        // Drain until the client pauses so chunked request
                        // bodies are captured along with the head.
                        let mut request = Vec::new();
                        let mut buf = [0u8; 8192];
                        loop {
                            match tokio::time::timeout(
                                Duration::from_millis(100),
                                socket.read(&mut buf),
                            )
                            .await
                            {
                                Ok(Ok(n)) if n > 0 => request.extend_from_slice(&buf[..n]),
                                _ => break,
                            }
                        }
                        sink.lock()
                            .await
                            .push(String::from_utf8_lossy(&request).into_owned());

                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    recorded
}
