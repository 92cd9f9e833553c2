//! Sliding-window rate limiter
//!
//! Tracks request timestamps per key and admits a request only when fewer
//! than the configured maximum fall inside the trailing window.

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::config::RateLimitConfig;
use crate::clock::{Clock, SystemClock};
use crate::monitor::{SecurityEventKind, SharedSecurityMonitor};

/// Timestamps older than this are discarded by a cleanup pass.
const CLEANUP_RETENTION_MS: u64 = 60_000;

/// Chance that any single check also runs a global cleanup pass.
const CLEANUP_PROBABILITY: f64 = 0.01;

/// Thread-safe handle to a limiter shared between callers.
pub type SharedRateLimiter<C = SystemClock> = Arc<Mutex<RateLimiter<C>>>;

/// Per-key sliding-window admission control.
///
/// Rejections are reported to the injected security monitor; callers only
/// see the boolean decision.
pub struct RateLimiter<C: Clock = SystemClock> {
    requests: HashMap<String, Vec<u64>>,
    default_limit: RateLimitConfig,
    monitor: SharedSecurityMonitor<C>,
    clock: C,
    cleanup_probability: f64,
}

impl RateLimiter<SystemClock> {
    pub fn new(default_limit: RateLimitConfig, monitor: SharedSecurityMonitor) -> Self {
        Self::with_clock(default_limit, monitor, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(
        default_limit: RateLimitConfig,
        monitor: SharedSecurityMonitor<C>,
        clock: C,
    ) -> Self {
        Self {
            requests: HashMap::new(),
            default_limit,
            monitor,
            clock,
            cleanup_probability: CLEANUP_PROBABILITY,
        }
    }

    /// Override the chance that a check also runs a cleanup pass.
    /// Tests pin this to 0.0 or 1.0.
    pub fn with_cleanup_probability(mut self, probability: f64) -> Self {
        self.cleanup_probability = probability;
        self
    }

    /// Wrap the limiter for shared ownership across threads.
    pub fn into_shared(self) -> SharedRateLimiter<C> {
        Arc::new(Mutex::new(self))
    }

    /// Check a request against the instance default policy.
    pub fn check(&mut self, key: &str) -> bool {
        let limit = self.default_limit;
        self.check_with(key, &limit)
    }

    /// Check a request against an explicit policy.
    ///
    /// Admits iff fewer than `max_requests` admitted timestamps fall
    /// strictly after `now - window_ms`. A rejected attempt is not recorded
    /// as a timestamp.
    pub fn check_with(&mut self, key: &str, limit: &RateLimitConfig) -> bool {
        let now = self.clock.now_ms();
        let cutoff = now.saturating_sub(limit.window_ms);

        let entry = self.requests.entry(key.to_string()).or_default();
        entry.retain(|&ts| ts > cutoff);

        let recent = entry.len();
        let admitted = (recent as u32) < limit.max_requests;
        if admitted {
            entry.push(now);
        } else {
            warn!(
                "Rate limit exceeded for '{}': {} requests in {}ms window",
                key, recent, limit.window_ms
            );
            self.monitor
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .log(
                    SecurityEventKind::RateLimit,
                    format!("Rate limit exceeded for {}", key),
                );
        }

        // Opportunistic cleanup keeps the key map bounded without a timer.
        if rand::random::<f64>() < self.cleanup_probability {
            self.cleanup();
        }

        admitted
    }

    /// Forget all recorded requests for a key. Idempotent.
    pub fn reset(&mut self, key: &str) {
        self.requests.remove(key);
    }

    /// Global pruning pass: drops timestamps older than the retention
    /// horizon and keys left with none. Returns the number of keys dropped.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now_ms();
        let horizon = now.saturating_sub(CLEANUP_RETENTION_MS);
        let before = self.requests.len();

        for timestamps in self.requests.values_mut() {
            timestamps.retain(|&ts| ts > horizon);
        }
        self.requests.retain(|_, timestamps| !timestamps.is_empty());

        let dropped = before - self.requests.len();
        if dropped > 0 {
            debug!("Cleanup dropped {} idle rate limit keys", dropped);
        }
        dropped
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.requests.len()
    }
}
