//! Session management: setup, configuration, and the active game.

mod config;
mod error;
mod manager;
mod roster;

pub use config::{ScoreboardConfig, DEFAULT_TAKEOUT_DELAY_MS, TAKEOUT_DELAY_ENV};
pub use error::{ConfigError, SetupError};
pub use manager::{GameSession, FEED_IDLE_STATUS, IDLE_STATUS};
pub use roster::{normalize_name, Roster, RosterEntry, RosterId, MAX_PLAYERS, MIN_PLAYERS};
