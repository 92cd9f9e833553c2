//! Security event types
//!
//! Defines the closed set of occurrences recorded by the monitor.

use serde::Serialize;
use std::fmt;

/// Kind of security-relevant occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventKind {
    /// A request was rejected by the rate limiter
    RateLimit,
    /// A caller submitted malformed or suspicious input
    InvalidInput,
    /// An outbound API call failed
    ApiError,
    /// A credential or token check failed
    AuthFailure,
}

impl fmt::Display for SecurityEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityEventKind::RateLimit => write!(f, "rate_limit"),
            SecurityEventKind::InvalidInput => write!(f, "invalid_input"),
            SecurityEventKind::ApiError => write!(f, "api_error"),
            SecurityEventKind::AuthFailure => write!(f, "auth_failure"),
        }
    }
}

/// A single recorded event. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityEvent {
    pub kind: SecurityEventKind,

    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,

    pub details: String,
}
