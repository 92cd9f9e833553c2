//! Rate limiting
//!
//! Provides sliding-window admission control for guarded operations.

pub mod cleanup;
pub mod config;
pub mod sliding_window;

pub use cleanup::spawn_cleanup_task;
pub use config::RateLimitConfig;
pub use sliding_window::{RateLimiter, SharedRateLimiter};
