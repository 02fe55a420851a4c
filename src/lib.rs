//! Typed configuration model for a TUN-based transparent proxy.
//!
//! Loads a TOML settings file into a strongly-shaped model, applies layered
//! defaults, and resolves symbolic proxy references to concrete `host:port`
//! endpoints. The model is built once per load and read-only afterwards;
//! hot reload swaps a whole new snapshot atomically.

pub mod config;

pub use config::loader::{load_config, parse_config, ConfigError};
pub use config::resolve::{ResolveError, ResolveResult};
pub use config::schema::AppConfig;
pub use config::watcher::{ConfigHandle, ConfigWatcher};
