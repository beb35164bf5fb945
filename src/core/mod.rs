//! Core engine types: players, segments, turn state, options, RNG.
//!
//! This module contains the vocabulary shared by every variant. Rule-sets
//! build on these types rather than extending them.

pub mod player;
pub mod segment;
pub mod state;
pub mod config;
pub mod rng;

pub use player::{Player, PlayerId, PlayerMap};
pub use segment::{Coords, Segment, ThrowEvent, BOARD_NUMBERS, BULL};
pub use state::{Announcement, TurnState};
pub use config::{GameOptions, VariantKind};
pub use rng::GameRng;
