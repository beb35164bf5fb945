//! # darts-scoreboard
//!
//! Scoring engine for a camera-instrumented dartboard.
//!
//! ## Design Principles
//!
//! 1. **Feed-Driven**: The only game input is the sensor feed. Darts land
//!    when the reported throw count rises; turns end a fixed delay after the
//!    darts are pulled.
//!
//! 2. **Variant-Agnostic Session**: The session holds a `Box<dyn GameVariant>`
//!    and never cares which game is behind it.
//!
//! 3. **Pure Render Models**: Variants compute a serializable board
//!    description. Drawing it is someone else's job.
//!
//! ## Modules
//!
//! - `core`: Players, segments, turn bookkeeping, options, RNG
//! - `rules`: `GameVariant` trait and `GameResult`
//! - `games`: Killer, Cricket, X01, Snakes & Ladders
//! - `feed`: Wire protocol and the throw-stream integrator
//! - `session`: Setup, configuration, the active game and its timer
//! - `render`: Board models and the per-update `Frame`

pub mod core;
pub mod rules;
pub mod games;
pub mod feed;
pub mod session;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Coords, GameOptions, GameRng, PlayerId, PlayerMap, Segment, ThrowEvent, VariantKind,
};

pub use crate::rules::{GameResult, GameVariant};

pub use crate::games::{build_variant, CricketGame, KillerGame, SnakesAndLaddersGame, X01Game};

pub use crate::feed::{FeedError, FeedMessage, FeedSnapshot, MotionState, ThrowIntegrator};

pub use crate::session::{ConfigError, GameSession, Roster, ScoreboardConfig, SetupError};

pub use crate::render::{Frame, RenderModel, WinnerBanner};
