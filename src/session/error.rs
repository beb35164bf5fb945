//! Setup and configuration errors.

use derive_more::{Display, Error};

use super::roster::{MAX_PLAYERS, MIN_PLAYERS};

/// Why a game could not be created. No game state exists when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupError {
    #[display("At least {} players are required, got {}", MIN_PLAYERS, _0)]
    TooFewPlayers(usize),

    #[display("At most {} players are supported, got {}", MAX_PLAYERS, _0)]
    TooManyPlayers(usize),

    #[display("Unknown game: {:?}", _0)]
    UnknownVariant(String),

    #[display("Player names must not be empty")]
    EmptyName,

    #[display("Invalid option {}: {}", option, reason)]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
}

impl std::error::Error for SetupError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
