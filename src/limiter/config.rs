//! Rate limit policy
//!
//! Defines the parameters of a sliding-window limit.

use serde::Deserialize;

/// Sliding-window limit parameters
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum admitted requests per window
    pub max_requests: u32,

    /// Window length in milliseconds
    pub window_ms: u64,
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_ms: u64) -> Self {
        Self {
            max_requests,
            window_ms,
        }
    }
}
