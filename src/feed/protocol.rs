//! Wire protocol DTOs for the sensor feed.
//!
//! Only `state` messages drive the game; `motion_state` is display-only.

use serde::{Deserialize, Serialize};

use crate::core::ThrowEvent;

/// Event label the sensor emits once every dart has been pulled.
pub const TAKEOUT_FINISHED: &str = "Takeout finished";

/// Messages the sensor service pushes over its stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum FeedMessage {
    /// Full leg state: the throws so far plus the sensor's status lines.
    State(FeedSnapshot),
    /// Camera/motion indicator flags.
    MotionState(MotionState),
}

impl FeedMessage {
    /// Parse one JSON message.
    pub fn parse(raw: &str) -> Result<Self, FeedError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FeedError::Empty);
        }
        serde_json::from_str(raw).map_err(|e| FeedError::Malformed(e.to_string()))
    }
}

/// State of the current sensor leg.
///
/// Every field defaults, so a payload without `throws` is an empty leg.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedSnapshot {
    pub throws: Vec<ThrowEvent>,
    pub num_throws: u32,
    pub event: String,
    pub status: String,
}

impl FeedSnapshot {
    /// Running total of the leg's darts.
    #[must_use]
    pub fn leg_total(&self) -> u32 {
        self.throws.iter().map(|t| t.segment.score()).sum()
    }

    #[must_use]
    pub fn is_takeout(&self) -> bool {
        self.event == TAKEOUT_FINISHED
    }
}

/// Sensor indicator flags, shown as status dots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionState {
    pub dart_is_in_frame: bool,
    pub hand_is_in_frame: bool,
    pub is_stable: bool,
    pub updating: bool,
    pub is_waiting: bool,
    pub all_darts_removed: bool,
}

/// A feed line that could not be understood. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FeedError {
    /// Blank line.
    #[display("Empty feed message")]
    Empty,

    /// Not JSON, or not a known message shape.
    #[display("Malformed feed message: {}", _0)]
    Malformed(String),
}

impl std::error::Error for FeedError {}
