//! Configuration management for the QuestWeave guard
//!
//! Loads rate limit policies from `config.toml` with environment variable
//! overrides, and validates them at the loading boundary.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::GuardError;
use crate::limiter::RateLimitConfig;

/// Guard configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GuardConfig {
    /// Policy applied to surfaces without a named entry
    pub default_limit: RateLimitConfig,

    /// Named per-surface policies ("generate_test", "profile_sync", ...)
    #[serde(default)]
    pub limits: HashMap<String, RateLimitConfig>,

    /// Interval for the optional periodic cleanup task, in seconds
    pub cleanup_interval_secs: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            default_limit: RateLimitConfig::new(10, 60_000),
            limits: HashMap::new(),
            cleanup_interval_secs: 60,
        }
    }
}

impl GuardConfig {
    /// Load configuration from `config.toml` with environment overrides
    /// (QUESTWEAVE_ prefix).
    pub fn load() -> Result<Self, GuardError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("QUESTWEAVE").separator("_"))
            .build()?;

        let config: GuardConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Policy for a named surface, falling back to the default.
    pub fn limit_for(&self, name: &str) -> &RateLimitConfig {
        self.limits.get(name).unwrap_or(&self.default_limit)
    }

    /// Rejects degenerate policies at the configuration boundary. The
    /// limiter itself accepts whatever it is handed at check time.
    fn validate(&self) -> Result<(), GuardError> {
        Self::validate_limit("default_limit", &self.default_limit)?;
        for (name, limit) in &self.limits {
            Self::validate_limit(name, limit)?;
        }

        if self.cleanup_interval_secs == 0 {
            return Err(config::ConfigError::Message(
                "cleanup_interval_secs must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(())
    }

    fn validate_limit(name: &str, limit: &RateLimitConfig) -> Result<(), GuardError> {
        if limit.max_requests == 0 {
            return Err(config::ConfigError::Message(format!(
                "limit '{}': max_requests must be greater than zero",
                name
            ))
            .into());
        }
        if limit.window_ms == 0 {
            return Err(config::ConfigError::Message(format!(
                "limit '{}': window_ms must be greater than zero",
                name
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GuardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_limit, RateLimitConfig::new(10, 60_000));
    }

    #[test]
    fn test_limit_for_falls_back_to_default() {
        let mut config = GuardConfig::default();
        config
            .limits
            .insert("generate_test".to_string(), RateLimitConfig::new(5, 30_000));

        assert_eq!(
            *config.limit_for("generate_test"),
            RateLimitConfig::new(5, 30_000)
        );
        assert_eq!(*config.limit_for("unknown"), config.default_limit);
    }

    #[test]
    fn test_validate_rejects_zero_max_requests() {
        let mut config = GuardConfig::default();
        config.default_limit = RateLimitConfig::new(0, 60_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let mut config = GuardConfig::default();
        config
            .limits
            .insert("broken".to_string(), RateLimitConfig::new(10, 0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_cleanup_interval() {
        let mut config = GuardConfig::default();
        config.cleanup_interval_secs = 0;
        assert!(config.validate().is_err());
    }
}
