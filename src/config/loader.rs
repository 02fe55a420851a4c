//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Nameservers used when the config file supplies none at all. A single
/// user-supplied entry suppresses both.
const FALLBACK_NAMESERVERS: [&str; 2] = ["114.114.114.114:53", "223.5.5.5:53"];

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate configuration from a TOML file.
///
/// Defaults are overlaid first (any key the file omits keeps its built-in
/// value), then the nameserver fallback and semantic validation run. The
/// returned model records the path it came from.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config = parse_config(&content)?;
    config.source_path = Some(path.to_path_buf());

    tracing::debug!(
        path = %path.display(),
        proxies = config.proxy.len(),
        patterns = config.pattern.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Parse and validate configuration from a TOML string.
///
/// Same pipeline as [`load_config`] minus file I/O; `source_path` is left
/// unset.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    if config.dns.nameserver.is_empty() {
        for ns in FALLBACK_NAMESERVERS {
            config.dns.nameserver.push(ns.to_string());
        }
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
