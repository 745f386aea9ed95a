//! Command-line configuration.
//!
//! Consolidates environment variable reads; command-line flags take
//! precedence over the environment.

use std::path::PathBuf;
use std::time::Duration;
use team_draw::seating::SeatingConfig;

/// Default seed when neither `--seed` nor `SEATING_SEED` is given
pub const DEFAULT_SEED: i64 = 1;

/// Complete draw configuration
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// JSON roster file
    pub roster: PathBuf,
    /// Seed of the first attempt
    pub seed: i64,
    /// Retry bounds
    pub seating: SeatingConfig,
    /// Print flattened seat records instead of the table map
    pub records: bool,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub roster: Option<PathBuf>,
    pub seed: Option<i64>,
    pub max_attempts: Option<u32>,
    pub deadline_ms: Option<u64>,
    pub records: bool,
}

impl DrawConfig {
    /// Load configuration from environment variables, applying overrides
    ///
    /// # Errors
    ///
    /// Returns error if no roster file is given or the retry bounds are invalid
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let roster = overrides
            .roster
            .or_else(|| std::env::var_os("SEATING_ROSTER").map(PathBuf::from))
            .ok_or_else(|| ConfigError::MissingRequired {
                var: "SEATING_ROSTER".to_string(),
                hint: "Pass --roster FILE or set SEATING_ROSTER".to_string(),
            })?;

        let seed = overrides
            .seed
            .unwrap_or_else(|| parse_env_or("SEATING_SEED", DEFAULT_SEED));

        let mut seating = SeatingConfig::from_env();
        if let Some(max_attempts) = overrides.max_attempts {
            seating.max_attempts = max_attempts;
        }
        if let Some(ms) = overrides.deadline_ms {
            seating.deadline = Some(Duration::from_millis(ms));
        }
        seating.validate()?;

        Ok(Self {
            roster,
            seed,
            seating,
            records: overrides.records,
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error(transparent)]
    Seating(#[from] team_draw::seating::ConfigError),
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
