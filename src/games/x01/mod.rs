//! X01 (301 / 501).
//!
//! - Everyone counts down from the starting score
//! - Darts accumulate over the turn; the turn is committed at its end
//! - Going below zero (or finishing off a non-double with double-out) busts:
//!   the turn is discarded and the score stands
//! - First to exactly zero wins

mod game;

pub use game::{TurnDart, X01Game, X01Player, CHECKOUT_RANGE};
