//! Target URL extraction and validation.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::proxy::error::ProxyError;

/// A validated upstream target.
///
/// Holds both the decoded string exactly as the client encoded it and its
/// parsed form. The parse is what the fetcher sends; the decoded string is
/// what logs and tests observe.
#[derive(Debug, Clone)]
pub struct TargetUrl {
    decoded: String,
    url: Url,
}

impl TargetUrl {
    /// The decoded target, byte-for-byte as the client encoded it.
    pub fn as_str(&self) -> &str {
        &self.decoded
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// ASCII serialization of the target's origin (scheme + host + port),
    /// used as the upstream Referer. Opaque origins serialize as "null".
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }
}

/// Resolve the path remainder after `/proxy/` into a validated target.
///
/// The segment is percent-decoded exactly once. The decoded string must be
/// non-empty, start with the literal prefix `http`, and parse as an
/// absolute URL. The prefix check is not a scheme whitelist: `http://` and
/// `https://` both pass, and so does any other `http*` scheme, which is
/// then left to fail at fetch time.
pub fn resolve(raw: &str) -> Result<TargetUrl, ProxyError> {
    let decoded = percent_decode_str(raw).decode_utf8_lossy().into_owned();

    if decoded.is_empty() || !decoded.starts_with("http") {
        return Err(ProxyError::InvalidTarget);
    }

    let url = Url::parse(&decoded).map_err(|_| ProxyError::InvalidTarget)?;

    Ok(TargetUrl { decoded, url })
}
