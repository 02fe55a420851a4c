//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files, and
//! every section carries its built-in defaults so a minimal (even empty)
//! config file yields a usable model.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the TUN proxy.
///
/// Built once per load and treated as immutable afterwards; resolvers only
/// ever read it. Proxy and pattern sections are keyed by name in sorted
/// maps so every scan over them is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// TUN device settings (address block, MTU).
    pub general: GeneralConfig,

    /// pprof debug endpoint settings.
    pub pprof: PprofConfig,

    /// DNS server settings and upstream nameservers.
    pub dns: DnsConfig,

    /// UDP relay settings.
    pub udp: UdpConfig,

    /// Route specifiers installed on the TUN device.
    pub route: RouteConfig,

    /// Upstream proxy definitions, keyed by name (`[proxy.<name>]`).
    pub proxy: BTreeMap<String, ProxyConfig>,

    /// Pattern matcher groups, keyed by name (`[pattern.<name>]`).
    pub pattern: BTreeMap<String, PatternConfig>,

    /// Rule chain: pattern groups in match order plus the final fallback.
    pub rule: RuleConfig,

    /// Path the model was loaded from. Diagnostic only.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

/// TUN device configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Address block claimed by the TUN device (CIDR).
    pub network: String,

    /// Device MTU.
    pub mtu: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            network: "198.18.0.0/15".to_string(),
            mtu: 1500,
        }
    }
}

/// pprof debug endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PprofConfig {
    /// Enable the profiling endpoint.
    pub enabled: bool,

    /// Bind host for the endpoint.
    pub prof_host: String,

    /// Bind port for the endpoint.
    pub prof_port: u16,
}

impl Default for PprofConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prof_host: "127.0.0.1".to_string(),
            prof_port: 6060,
        }
    }
}

/// DNS server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DnsConfig {
    /// Resolution mode. "fake" hands out addresses from the TUN block;
    /// other tags pass queries through.
    pub dns_mode: String,

    /// Listen port of the local DNS server.
    pub dns_port: u16,

    /// TTL in seconds for synthesized answers.
    pub dns_ttl: u32,

    /// Maximum DNS packet size in bytes.
    pub dns_packet_size: u16,

    /// Read timeout in seconds for upstream queries.
    pub dns_read_timeout: u64,

    /// Write timeout in seconds for upstream queries.
    pub dns_write_timeout: u64,

    /// Upstream nameservers, tried in order. Left empty, the loader fills
    /// in the built-in resolvers.
    pub nameserver: Vec<String>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            dns_mode: "fake".to_string(),
            dns_port: 53,
            dns_ttl: 600,
            dns_packet_size: 4096,
            dns_read_timeout: 5,
            dns_write_timeout: 5,
            nameserver: Vec::new(),
        }
    }
}

/// UDP relay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UdpConfig {
    /// Name of the proxy entry UDP traffic is sent through. Empty means
    /// "use the default proxy".
    pub proxy: String,

    /// Enable UDP relaying.
    pub enabled: bool,

    /// Session timeout in seconds.
    pub timeout: u64,
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            proxy: String::new(),
            enabled: true,
            timeout: 300,
        }
    }
}

/// Route specifiers installed on the TUN device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteConfig {
    pub v: Vec<String>,
}

/// One upstream proxy definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Proxy address in URL form, e.g. `socks5://127.0.0.1:1080`.
    pub url: String,

    /// Marks this entry as the default proxy. At most one entry should
    /// carry the flag; when several do, the lexicographically first name
    /// wins.
    pub default: bool,
}

/// One pattern matcher group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PatternConfig {
    /// Proxy entry traffic matching this group is sent through.
    pub proxy: String,

    /// Matching scheme tag, e.g. `DOMAIN-SUFFIX` or `IP-CIDR`.
    pub scheme: String,

    /// Patterns in match order.
    pub v: Vec<String>,
}

/// Rule chain configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RuleConfig {
    /// Pattern group names, consulted in order.
    pub pattern: Vec<String>,

    /// Proxy entry used when no pattern group matches.
    #[serde(rename = "final")]
    pub fallback: String,
}
