//! Security monitoring
//!
//! Provides the bounded audit trail of security-relevant events.

pub mod audit;
pub mod event;
pub mod stats;

pub use audit::{MAX_EVENTS, RECENT_WINDOW_MINUTES, SecurityMonitor, SharedSecurityMonitor};
pub use event::{SecurityEvent, SecurityEventKind};
pub use stats::SecurityStats;
