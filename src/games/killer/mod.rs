//! Killer.
//!
//! - Each player is dealt a distinct board number
//! - Hit your own number enough times to become a killer
//! - Killers take lives from whoever owns the number they hit
//! - A killer hitting their own number loses lives instead
//! - Last player standing wins
//!
//! Multipliers count: a double is two hits or two lives.

mod game;

pub use game::{KillerGame, KillerPlayer};
