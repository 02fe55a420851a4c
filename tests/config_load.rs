//! End-to-end configuration load tests.

use std::io::Write;

use tun_proxy_config::{load_config, AppConfig, ConfigError, ConfigHandle, ResolveError};

const FULL_CONFIG: &str = r#"
[general]
network = "10.192.0.0/16"
mtu = 1400

[pprof]
enabled = false
prof-host = "0.0.0.0"
prof-port = 6061

[dns]
dns-mode = "fake"
dns-port = 5353
dns-ttl = 300
nameserver = ["8.8.8.8:53", "1.1.1.1:53"]

[udp]
proxy = "web"
timeout = 120

[route]
v = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]

[proxy.web]
url = "socks5://127.0.0.1:1080"
default = true

[proxy.backup]
url = "socks5://10.0.0.9:1080"

[pattern.lan]
proxy = "backup"
scheme = "IP-CIDR"
v = ["192.168.0.0/16"]

[rule]
pattern = ["lan"]
final = "web"
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(FULL_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.general.network, "10.192.0.0/16");
    assert_eq!(config.general.mtu, 1400);
    assert!(!config.pprof.enabled);
    assert_eq!(config.dns.dns_port, 5353);
    assert_eq!(config.dns.nameserver, vec!["8.8.8.8:53", "1.1.1.1:53"]);
    // Keys the file omits keep their defaults.
    assert_eq!(config.dns.dns_packet_size, 4096);
    assert!(config.udp.enabled);
    assert_eq!(config.udp.timeout, 120);
    assert_eq!(config.route.v.len(), 3);
    assert_eq!(config.rule.pattern, vec!["lan"]);
    assert_eq!(config.rule.fallback, "web");
    assert_eq!(config.source_path.as_deref(), Some(file.path()));
}

#[test]
fn test_load_is_idempotent() {
    let file = write_config(FULL_CONFIG);
    let first = load_config(file.path()).unwrap();
    let second = load_config(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_config(std::path::Path::new("/nonexistent/config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_resolution_against_loaded_config() {
    let file = write_config(FULL_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.proxy_endpoint("web").unwrap(), "127.0.0.1:1080");
    assert_eq!(config.proxy_endpoint("backup").unwrap(), "10.0.0.9:1080");
    assert_eq!(config.default_proxy_endpoint().unwrap(), "127.0.0.1:1080");
    assert_eq!(config.udp_proxy_endpoint().unwrap(), "127.0.0.1:1080");

    let err = config.proxy_endpoint("missing").unwrap_err();
    assert!(matches!(err, ResolveError::NotFound(_)));
}

#[test]
fn test_udp_falls_back_when_reference_is_dangling() {
    // udp.proxy names an entry that does not exist; the default proxy
    // picks up the traffic.
    let file = write_config(
        r#"
        [udp]
        proxy = "web"

        [proxy.backup]
        url = "socks5://10.0.0.9:1080"
        default = true
        "#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.udp_proxy_endpoint().unwrap(), "10.0.0.9:1080");
}

#[test]
fn test_hot_reload_swaps_snapshot() {
    let file = write_config(FULL_CONFIG);
    let handle = ConfigHandle::new(load_config(file.path()).unwrap());
    assert_eq!(handle.current().general.mtu, 1400);

    // Simulate the watcher's reload path: load fresh, swap whole snapshot.
    let next = write_config("[general]\nmtu = 9000\n");
    handle.replace(load_config(next.path()).unwrap());
    assert_eq!(handle.current().general.mtu, 9000);
    assert_eq!(handle.current().general.network, "198.18.0.0/15");
}

#[test]
fn test_default_model_matches_empty_file() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    let mut expected = AppConfig::default();
    expected.dns.nameserver = vec!["114.114.114.114:53".to_string(), "223.5.5.5:53".to_string()];
    expected.source_path = Some(file.path().to_path_buf());
    assert_eq!(config, expected);
}
