//! Game configuration.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Seconds on the clock for a fresh game.
pub const DEFAULT_CHRONO_TIMER: i64 = 60;

/// Cards that may be face up and unresolved at once.
pub const MAX_FLIPPED: usize = 2;

/// Settings for a new game. Missing fields fall back to their defaults.
///
/// # Example
///
/// ```rust
/// use memory_pairs::game::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "initialChronoTimer": 90 }"#).unwrap();
/// assert_eq!(config.initial_chrono_timer, 90);
///
/// let config = GameConfig::from_json("{}").unwrap();
/// assert_eq!(config.initial_chrono_timer, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub initial_chrono_timer: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_chrono_timer: DEFAULT_CHRONO_TIMER,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the starting countdown.
    pub fn with_chrono_timer(mut self, seconds: i64) -> Self {
        self.initial_chrono_timer = seconds;
        self
    }
}
