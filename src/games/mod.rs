//! Built-in dart variants.
//!
//! Each variant lives in its own module with a `mod.rs` summarising the
//! rules and a `game.rs` holding the state machine.

pub mod cricket;
pub mod killer;
pub mod snakes;
pub mod x01;

use crate::core::{GameOptions, GameRng, VariantKind};
use crate::rules::GameVariant;

pub use cricket::CricketGame;
pub use killer::KillerGame;
pub use snakes::SnakesAndLaddersGame;
pub use x01::X01Game;

/// Construct a variant for the given roster. Options a variant does not
/// use are ignored.
///
/// The caller validates player counts and options beforehand.
pub fn build_variant(
    kind: VariantKind,
    names: &[String],
    options: &GameOptions,
    rng: &mut GameRng,
) -> Box<dyn GameVariant + Send> {
    match kind {
        VariantKind::Killer => Box::new(KillerGame::new(names, options, rng)),
        VariantKind::Cricket => Box::new(CricketGame::new(names)),
        VariantKind::X301 | VariantKind::X501 => Box::new(X01Game::new(kind, names, options)),
        VariantKind::SnakesAndLadders => Box::new(SnakesAndLaddersGame::new(names)),
    }
}
