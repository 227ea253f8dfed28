//! Edge gateway for browser-restricted media fetches.
//!
//! A browser playing third-party video cannot fetch segment and manifest
//! URLs directly: the origin enforces referer checks and never sends CORS
//! headers. This gateway takes the target URL percent-encoded into the
//! request path, fetches it while impersonating a desktop browser, and
//! relays the response with permissive CORS headers forced on.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                MEDIA GATEWAY                 │
//!                    │                                              │
//!   Client Request   │  ┌─────────┐     ┌──────────────────────┐   │
//!   ─────────────────┼─▶│  http   │────▶│ /proxy/* → resolver  │   │
//!                    │  │ server  │     │            fetcher   │───┼──▶ Upstream
//!                    │  └────┬────┘     │            relay     │   │    (any host)
//!                    │       │          └──────────────────────┘   │
//!                    │       ├─▶ /api/env   (config exposure)      │
//!                    │       └─▶ fallback   (static landing page)  │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐ │
//!                    │  │  config  │ observability │  request id │ │
//!                    │  └────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod proxy;

// Cross-cutting concerns
pub mod observability;

pub use config::GatewayConfig;
pub use http::GatewayServer;
