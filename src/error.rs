//! Error types
//!
//! Defines the crate-level error type. The guard core itself never fails;
//! the only fallible operation is configuration loading.

use std::fmt;

/// Guard error
#[derive(Debug)]
pub enum GuardError {
    Config(config::ConfigError),
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for GuardError {}

impl From<config::ConfigError> for GuardError {
    fn from(error: config::ConfigError) -> Self {
        GuardError::Config(error)
    }
}
