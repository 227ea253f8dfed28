//! Outbound requests to validated targets.

use std::time::Duration;

use axum::body::Body;
use axum::http::Method;
use reqwest::header::{HeaderValue, ACCEPT, REFERER, USER_AGENT};

use crate::config::UpstreamConfig;
use crate::proxy::error::{ProxyError, SetupError};
use crate::proxy::resolver::TargetUrl;

/// Upstream HTTP client with a fixed impersonation header set.
///
/// Every outbound request carries exactly three headers: the configured
/// desktop-browser User-Agent, the configured Accept value, and a Referer
/// derived from the target's own origin. Nothing from the inbound request's
/// header set crosses over — cookies and auth tokens stay with the gateway.
#[derive(Clone)]
pub struct UpstreamFetcher {
    client: reqwest::Client,
    user_agent: HeaderValue,
    accept: HeaderValue,
}

impl UpstreamFetcher {
    pub fn new(config: &UpstreamConfig) -> Result<Self, SetupError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_secs))
            .timeout(Duration::from_secs(config.request_secs))
            .build()?;

        Ok(Self {
            client,
            user_agent: HeaderValue::from_str(&config.user_agent)?,
            accept: HeaderValue::from_str(&config.accept)?,
        })
    }

    /// Forward `method` and `body` to `target`.
    ///
    /// The inbound body, when present, is streamed through unmodified. Any
    /// failure to reach or read from the upstream maps to
    /// [`ProxyError::Upstream`]; there is no retry.
    pub async fn fetch(
        &self,
        method: Method,
        target: &TargetUrl,
        body: Option<Body>,
    ) -> Result<reqwest::Response, ProxyError> {
        let referer = HeaderValue::from_str(&target.origin())
            .map_err(|err| ProxyError::Upstream(err.to_string()))?;

        let mut request = self
            .client
            .request(method, target.url().clone())
            .header(USER_AGENT, self.user_agent.clone())
            .header(ACCEPT, self.accept.clone())
            .header(REFERER, referer);

        if let Some(body) = body {
            request = request.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        let response = request.send().await?;
        Ok(response)
    }
}
