//! Rule-set trait for game variants.
//!
//! Variants implement `GameVariant` to define:
//! - The scoring effect of a single dart
//! - End-of-turn effects and turn order
//! - Win conditions
//!
//! The session and integrator call into `GameVariant` but never interpret
//! variant-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, GameVariant};
