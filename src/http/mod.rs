//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route dispatch)
//!     → request.rs (request ID layer)
//!     → /proxy/*  → proxy handler (forwarding core)
//!       /api/*    → api.rs (config exposure)
//!       fallback  → assets.rs (embedded landing page)
//! ```

pub mod api;
pub mod assets;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, GatewayServer};
