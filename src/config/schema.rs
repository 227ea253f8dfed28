//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream fetch settings (timeouts, impersonation headers).
    pub upstream: UpstreamConfig,

    /// API surface settings (the exposed password).
    pub api: ApiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream fetch configuration.
///
/// The User-Agent and Accept values are sent on every upstream request,
/// replacing whatever the client supplied. The Referer is always derived
/// from the target URL's origin and is not configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total per-request timeout in seconds, covering the body transfer.
    pub request_secs: u64,

    /// User-Agent presented to upstream servers.
    pub user_agent: String,

    /// Accept header presented to upstream servers.
    pub accept: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            accept: "application/json, text/plain, */*".to_string(),
        }
    }
}

/// API surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Password handed to the client by `/api/env`. Empty by default; the
    /// PASSWORD environment variable takes precedence over the config file.
    pub password: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
