//! Security audit trail
//!
//! Maintains a bounded in-memory log of security events, queryable by
//! recency and by kind.

use log::{debug, info};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::event::{SecurityEvent, SecurityEventKind};
use super::stats::SecurityStats;
use crate::clock::{Clock, SystemClock};

/// Maximum number of retained events; the oldest are evicted first.
pub const MAX_EVENTS: usize = 100;

/// Trailing window used by recency queries and `stats`, in minutes.
pub const RECENT_WINDOW_MINUTES: u64 = 5;

/// Thread-safe handle to a monitor shared between producers.
pub type SharedSecurityMonitor<C = SystemClock> = Arc<Mutex<SecurityMonitor<C>>>;

/// Bounded, append-only security event log.
///
/// Constructed once at startup and handed to every producer; there is no
/// process-wide instance.
pub struct SecurityMonitor<C: Clock = SystemClock> {
    events: VecDeque<SecurityEvent>,
    clock: C,
}

impl SecurityMonitor<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SecurityMonitor<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SecurityMonitor<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            events: VecDeque::with_capacity(MAX_EVENTS),
            clock,
        }
    }

    /// Wrap the monitor for shared ownership across threads.
    pub fn into_shared(self) -> SharedSecurityMonitor<C> {
        Arc::new(Mutex::new(self))
    }

    /// Record an event. Never fails; once the log is full the oldest entry
    /// is evicted.
    pub fn log(&mut self, kind: SecurityEventKind, details: impl Into<String>) {
        let event = SecurityEvent {
            kind,
            timestamp_ms: self.clock.now_ms(),
            details: details.into(),
        };
        debug!("Security event [{}]: {}", event.kind, event.details);

        if self.events.len() == MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Events newer than the given trailing window, in insertion order.
    pub fn recent_events(&self, minutes: u64) -> Vec<SecurityEvent> {
        let cutoff = self.clock.now_ms().saturating_sub(minutes * 60_000);
        self.events
            .iter()
            .filter(|e| e.timestamp_ms > cutoff)
            .cloned()
            .collect()
    }

    /// All stored events of one kind, in insertion order.
    pub fn events_by_kind(&self, kind: SecurityEventKind) -> Vec<SecurityEvent> {
        self.events
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    /// Aggregate counts. The per-kind counters cover the trailing
    /// `RECENT_WINDOW_MINUTES` only.
    pub fn stats(&self) -> SecurityStats {
        let cutoff = self
            .clock
            .now_ms()
            .saturating_sub(RECENT_WINDOW_MINUTES * 60_000);

        let mut stats = SecurityStats {
            total: self.events.len(),
            ..SecurityStats::default()
        };

        for event in self.events.iter().filter(|e| e.timestamp_ms > cutoff) {
            stats.recent += 1;
            match event.kind {
                SecurityEventKind::RateLimit => stats.rate_limit += 1,
                SecurityEventKind::InvalidInput => stats.invalid_input += 1,
                SecurityEventKind::ApiError => stats.api_error += 1,
                SecurityEventKind::AuthFailure => stats.auth_failure += 1,
            }
        }
        stats
    }

    /// Drop all stored events. Idempotent.
    pub fn clear(&mut self) {
        if !self.events.is_empty() {
            info!("Security event log cleared ({} events dropped)", self.events.len());
        }
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    // A plausible epoch origin; zero would make every timestamp "expired".
    const T0: u64 = 1_700_000_000_000;

    fn monitor_at(start_ms: u64) -> (SecurityMonitor<ManualClock>, ManualClock) {
        let clock = ManualClock::new(start_ms);
        (SecurityMonitor::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_log_records_kind_time_and_details() {
        let (mut monitor, clock) = monitor_at(T0);

        monitor.log(SecurityEventKind::ApiError, "upstream returned 502");
        clock.advance(25);
        monitor.log(SecurityEventKind::AuthFailure, "bad token");

        let events = monitor.recent_events(RECENT_WINDOW_MINUTES);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, SecurityEventKind::ApiError);
        assert_eq!(events[0].timestamp_ms, T0);
        assert_eq!(events[0].details, "upstream returned 502");
        assert_eq!(events[1].timestamp_ms, T0 + 25);
    }

    #[test]
    fn test_capacity_keeps_only_most_recent_hundred() {
        let (mut monitor, clock) = monitor_at(T0);

        for i in 0..150 {
            monitor.log(SecurityEventKind::InvalidInput, format!("event {}", i));
            clock.advance(1);
        }

        let stats = monitor.stats();
        assert_eq!(stats.total, 100);

        // Exactly the 100 most recent, still in insertion order.
        let events = monitor.events_by_kind(SecurityEventKind::InvalidInput);
        assert_eq!(events.len(), 100);
        assert_eq!(events[0].details, "event 50");
        assert_eq!(events[99].details, "event 149");
    }

    #[test]
    fn test_recent_events_zero_window_is_empty() {
        let (mut monitor, _clock) = monitor_at(T0);
        monitor.log(SecurityEventKind::RateLimit, "user:123");

        assert!(monitor.recent_events(0).is_empty());
    }

    #[test]
    fn test_recent_events_excludes_expired() {
        let (mut monitor, clock) = monitor_at(T0);

        monitor.log(SecurityEventKind::RateLimit, "old");
        clock.advance(6 * 60_000);
        monitor.log(SecurityEventKind::RateLimit, "new");

        let events = monitor.recent_events(5);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].details, "new");
    }

    #[test]
    fn test_events_by_kind_filters() {
        let (mut monitor, _clock) = monitor_at(T0);

        monitor.log(SecurityEventKind::InvalidInput, "bad email");
        monitor.log(SecurityEventKind::AuthFailure, "bad token");

        let events = monitor.events_by_kind(SecurityEventKind::InvalidInput);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].details, "bad email");
    }

    #[test]
    fn test_stats_counts_per_kind_within_window() {
        let (mut monitor, clock) = monitor_at(T0);

        monitor.log(SecurityEventKind::ApiError, "stale");
        clock.advance(10 * 60_000);

        monitor.log(SecurityEventKind::RateLimit, "a");
        monitor.log(SecurityEventKind::RateLimit, "b");
        monitor.log(SecurityEventKind::AuthFailure, "c");

        let stats = monitor.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.recent, 3);
        assert_eq!(stats.rate_limit, 2);
        assert_eq!(stats.auth_failure, 1);
        assert_eq!(stats.api_error, 0);
        assert_eq!(stats.invalid_input, 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (mut monitor, _clock) = monitor_at(T0);

        monitor.log(SecurityEventKind::ApiError, "boom");
        monitor.clear();
        assert!(monitor.is_empty());

        monitor.clear();
        assert!(monitor.is_empty());
        assert_eq!(monitor.stats().total, 0);
    }
}
