//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (defaults, parse & deserialize, nameserver fallback)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → resolve.rs (proxy name → host:port endpoint lookups)
//!
//! On reload signal:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of the ConfigHandle snapshot
//!     → readers observe new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Resolution failures are typed errors, never empty strings

pub mod loader;
pub mod resolve;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use resolve::{ResolveError, ResolveResult};
pub use schema::{AppConfig, PatternConfig, ProxyConfig};
pub use watcher::{ConfigHandle, ConfigWatcher};
