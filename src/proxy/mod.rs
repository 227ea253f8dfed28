//! Request-forwarding core.
//!
//! # Data Flow
//! ```text
//! /proxy/{encoded-target-url}
//!     → resolver.rs (percent-decode, validate target)
//!     → fetcher.rs (impersonated upstream request)
//!     → relay.rs (stream response back, force CORS headers)
//! ```
//!
//! # Design Decisions
//! - One linear pass per request: resolve, fetch, relay. No retries, no
//!   partial success; the three terminal outcomes (400, 500, relayed
//!   response) are mutually exclusive and exhaustive.
//! - Client headers are never forwarded upstream; the fetcher owns the
//!   complete outbound header set
//! - Upstream bodies are streamed, never buffered

pub mod error;
pub mod fetcher;
pub mod handler;
pub mod relay;
pub mod resolver;

pub use error::{ProxyError, SetupError};
pub use fetcher::UpstreamFetcher;
pub use resolver::TargetUrl;
