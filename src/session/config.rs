//! Scoreboard configuration.
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! takeout_delay_ms = 1000
//! seed = 42
//!
//! [options]
//! startingLives = 5
//! doubleOut = true
//! ```

use std::env;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::error::ConfigError;
use crate::core::GameOptions;

/// Env var that overrides `takeout_delay_ms`.
pub const TAKEOUT_DELAY_ENV: &str = "TAKEOUT_DELAY_MS";

/// Default pause between "Takeout finished" and the turn advance.
pub const DEFAULT_TAKEOUT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Lets the dart-removal motion settle before the board moves on.
    pub takeout_delay_ms: u64,

    /// Fixed RNG seed (Killer number draw). Random when absent.
    pub seed: Option<u64>,

    /// Options used when a game is started without explicit ones.
    pub options: GameOptions,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            takeout_delay_ms: DEFAULT_TAKEOUT_DELAY_MS,
            seed: None,
            options: GameOptions::default(),
        }
    }
}

impl ScoreboardConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            takeout_delay_ms = config.takeout_delay_ms,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Apply `TAKEOUT_DELAY_MS` from the environment, if set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_delay_override(env::var(TAKEOUT_DELAY_ENV).ok().as_deref())
    }

    fn with_delay_override(mut self, raw: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = raw {
            self.takeout_delay_ms = raw.trim().parse().map_err(|_| {
                ConfigError::new(format!("{TAKEOUT_DELAY_ENV} must be milliseconds, got {raw:?}"))
            })?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_takeout_delay(mut self, delay: Duration) -> Self {
        self.takeout_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn takeout_delay(&self) -> Duration {
        Duration::from_millis(self.takeout_delay_ms)
    }
}
