//! Periodic cleanup task
//!
//! Drives the limiter's pruning pass on a fixed interval, for embedders
//! that prefer a scheduled trigger over the opportunistic one.

use log::info;
use std::sync::PoisonError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;

use super::sliding_window::SharedRateLimiter;
use crate::clock::Clock;

/// Spawn a task that runs `RateLimiter::cleanup` every `period`.
///
/// The task runs until aborted or until the runtime shuts down.
pub fn spawn_cleanup_task<C>(limiter: SharedRateLimiter<C>, period: Duration) -> JoinHandle<()>
where
    C: Clock + Send + 'static,
{
    info!("Rate limiter cleanup task started (interval: {:?})", period);

    tokio::spawn(async move {
        let mut ticker = interval(period);
        // The first tick completes immediately; skip it so passes land on
        // period boundaries.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            limiter
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .cleanup();
        }
    })
}
