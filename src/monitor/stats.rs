//! Monitor summary types
//!
//! Defines the aggregate view returned by the security monitor.

use serde::Serialize;

/// Aggregate counts over the stored event log.
///
/// `total` covers everything currently stored; `recent` and the per-kind
/// counters only cover the trailing inspection window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SecurityStats {
    pub total: usize,
    pub recent: usize,
    pub rate_limit: usize,
    pub invalid_input: usize,
    pub api_error: usize,
    pub auth_failure: usize,
}
