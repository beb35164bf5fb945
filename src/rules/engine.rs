//! The capability every rule-set implements.
//!
//! Variants implement `GameVariant` to define:
//! - How one dart changes the current player's state
//! - What happens at the end of a turn
//! - When the game is won
//!
//! The session and the throw integrator hold a `Box<dyn GameVariant>` and
//! never look at which variant is behind it.

use crate::core::{Announcement, PlayerId, Segment, TurnState, VariantKind};
use crate::render::{RenderModel, WinnerBanner};

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Game ended with nobody left to win (every seat eliminated).
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Variant capability set.
///
/// ## Implementation Notes
///
/// - `process_throw`: one call is one dart. Applies to the current player
///   only and never advances the turn. No-op once the game is over.
/// - `next_player`: commits end-of-turn effects and moves to the next
///   eligible seat, or ends the game when none remain. No-op once over.
/// - `check_winner`: evaluates the variant's win rule and records the
///   result in the turn state. Variants call it after their own mutations.
/// - Every mutation updates `announcement()`.
pub trait GameVariant {
    /// Which rule-set this is.
    fn kind(&self) -> VariantKind;

    /// Publish the opening status and event lines.
    fn start(&mut self);

    /// Apply one dart to the current player.
    fn process_throw(&mut self, segment: &Segment);

    /// End the current turn.
    fn next_player(&mut self);

    /// Evaluate the win rule, returning the result once the game is decided.
    fn check_winner(&mut self) -> Option<GameResult>;

    /// Turn bookkeeping (current seat, game over, winner).
    fn turn(&self) -> &TurnState;

    /// Latest status and event lines.
    fn announcement(&self) -> &Announcement;

    /// Compute the board payload for the renderer.
    fn render(&self) -> RenderModel;

    /// Banner for the winner, once there is one.
    fn winner_banner(&self) -> Option<WinnerBanner>;

    /// Display name of a seat.
    fn player_name(&self, player: PlayerId) -> &str;

    // === Convenience Methods ===

    fn current_player(&self) -> PlayerId {
        self.turn().current
    }

    fn is_over(&self) -> bool {
        self.turn().game_over
    }

    fn winner(&self) -> Option<PlayerId> {
        self.turn().winner
    }

    /// Result of the game, `None` while it is still running.
    fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        Some(match self.winner() {
            Some(player) => GameResult::Winner(player),
            None => GameResult::NoWinner,
        })
    }
}
