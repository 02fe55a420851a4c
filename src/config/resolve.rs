//! Proxy endpoint resolution.
//!
//! # Responsibilities
//! - Turn a symbolic proxy name into a concrete `host:port` endpoint
//! - Select the default proxy entry deterministically
//! - Resolve the UDP proxy reference with fallback to the default
//!
//! # Design Decisions
//! - Every failure is a typed error; no lookup ever yields an empty string
//! - Default selection scans the name-sorted proxy map, so two entries both
//!   flagged as default always resolve to the same one
//! - No caching; every call is a couple of map lookups and a URL parse

use thiserror::Error;
use url::Url;

use crate::config::schema::{AppConfig, ProxyConfig};

/// Errors that can occur while resolving a proxy reference.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The referenced proxy name has no entry in the proxy map.
    #[error("proxy {0:?} is not defined")]
    NotFound(String),

    /// A proxy's address did not parse as a URL.
    #[error("invalid proxy address {url:?}")]
    AddressParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A proxy's address parsed but carries no host.
    #[error("proxy address {0:?} has no host")]
    MissingHost(String),

    /// Neither an explicit proxy nor a default proxy is available.
    #[error("no proxy configured")]
    NoProxyConfigured,
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

impl AppConfig {
    /// Resolve a proxy name to its `host:port` endpoint.
    ///
    /// `socks5://127.0.0.1:1080` resolves to `127.0.0.1:1080`.
    pub fn proxy_endpoint(&self, name: &str) -> ResolveResult<String> {
        let proxy = self
            .proxy
            .get(name)
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))?;
        endpoint_of(proxy)
    }

    /// The proxy entry marked as default, if any.
    ///
    /// Entries are scanned in name order; absence is an expected state, not
    /// an error.
    pub fn default_proxy(&self) -> Option<&ProxyConfig> {
        self.proxy.values().find(|proxy| proxy.default)
    }

    /// Resolve the default proxy to its `host:port` endpoint.
    pub fn default_proxy_endpoint(&self) -> ResolveResult<String> {
        let proxy = self.default_proxy().ok_or(ResolveError::NoProxyConfigured)?;
        endpoint_of(proxy)
    }

    /// Resolve the endpoint UDP traffic should be relayed through.
    ///
    /// Tries the proxy named by `udp.proxy` first, then the default proxy.
    /// An entry that exists but carries a bad address is a hard failure,
    /// not a reason to fall back.
    pub fn udp_proxy_endpoint(&self) -> ResolveResult<String> {
        if let Some(proxy) = self.proxy.get(&self.udp.proxy) {
            return endpoint_of(proxy);
        }
        let proxy = self.default_proxy().ok_or(ResolveError::NoProxyConfigured)?;
        endpoint_of(proxy)
    }
}

/// Parse a proxy's address and return its `host:port` authority.
fn endpoint_of(proxy: &ProxyConfig) -> ResolveResult<String> {
    let parsed = Url::parse(&proxy.url).map_err(|source| ResolveError::AddressParse {
        url: proxy.url.clone(),
        source,
    })?;
    // Non-special schemes may parse with an empty host; treat that the
    // same as no host at all.
    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| ResolveError::MissingHost(proxy.url.clone()))?;
    Ok(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
