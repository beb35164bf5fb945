//! Snakes & Ladders.
//!
//! - Every dart moves the thrower forward by its score
//! - Moves past 100 stop at 100
//! - Landing on a snake head slides down; on a ladder bottom climbs up
//! - First to space 100 wins

mod game;

pub use game::{SnakesAndLaddersGame, SnakesPlayer, BOARD_SIZE, LADDERS, PLAYER_COLORS, SNAKES};
