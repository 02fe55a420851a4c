//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (MTU positive, network block present)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs after defaulting and nameserver fallback, before the model is
//!   handed out
//! - Proxy URLs are not checked here; address errors surface as typed
//!   resolution errors so callers can tell a bad address from a missing one

use crate::config::schema::AppConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `general.network` is empty.
    EmptyNetwork,
    /// `general.mtu` is zero.
    ZeroMtu,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyNetwork => write!(f, "general.network must not be empty"),
            ValidationError::ZeroMtu => write!(f, "general.mtu must be positive"),
        }
    }
}

/// Check the model for semantic errors, collecting every failure.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.general.network.is_empty() {
        errors.push(ValidationError::EmptyNetwork);
    }
    if config.general.mtu == 0 {
        errors.push(ValidationError::ZeroMtu);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
