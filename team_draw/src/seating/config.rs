//! Retry configuration for the table draw.

use std::time::Duration;
use thiserror::Error;

/// Default cap on build/shuffle/fill attempts per draw
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000;

/// Seating configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingConfig {
    /// Maximum attempts (one seed each) before giving up
    pub max_attempts: u32,

    /// Optional wall-clock budget for the whole draw
    pub deadline: Option<Duration>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            deadline: None,
        }
    }
}

impl SeatingConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `SEATING_MAX_ATTEMPTS`: attempt cap (default: 1000)
    /// - `SEATING_DEADLINE_MS`: deadline in milliseconds (default: none)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            max_attempts: parse_env_or("SEATING_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
            deadline: std::env::var("SEATING_DEADLINE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis),
        }
    }

    /// Set the attempt cap
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set a deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid {
                var: "SEATING_MAX_ATTEMPTS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::remove_var("SEATING_MAX_ATTEMPTS");
            std::env::remove_var("SEATING_DEADLINE_MS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(SeatingConfig::from_env(), SeatingConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("SEATING_MAX_ATTEMPTS", "25");
            std::env::set_var("SEATING_DEADLINE_MS", "1500");
        }

        let config = SeatingConfig::from_env();
        assert_eq!(config.max_attempts, 25);
        assert_eq!(config.deadline, Some(Duration::from_millis(1500)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        clear_env();
        unsafe {
            std::env::set_var("SEATING_MAX_ATTEMPTS", "lots");
        }

        assert_eq!(SeatingConfig::from_env().max_attempts, DEFAULT_MAX_ATTEMPTS);
        clear_env();
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = SeatingConfig::default().with_max_attempts(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("SEATING_MAX_ATTEMPTS"));
    }
}
