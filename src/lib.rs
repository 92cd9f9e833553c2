//! QuestWeave Guard
//!
//! Admission control and security audit trail for the QuestWeave learning
//! platform. Callers check the rate limiter before expensive or outbound
//! operations; rejections and other security-relevant occurrences land in
//! a bounded in-memory log for later inspection.

pub mod clock;
pub mod config;
pub mod error;
pub mod limiter;
pub mod monitor;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GuardConfig;
pub use error::GuardError;
pub use limiter::{RateLimitConfig, RateLimiter, SharedRateLimiter, spawn_cleanup_task};
pub use monitor::{
    SecurityEvent, SecurityEventKind, SecurityMonitor, SecurityStats, SharedSecurityMonitor,
};
