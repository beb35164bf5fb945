//! Turn bookkeeping and the published status line.
//!
//! ## TurnState
//!
//! Every variant owns one: whose turn it is, how many turns have been
//! committed, and whether the game has finished (and who won).
//! `current` always names a seat in `0..player_count`.
//!
//! ## Announcement
//!
//! The two lines of text a variant publishes after each mutation: a status
//! ("Killer - In Progress", "Game Over") and an event ("Alice's turn").

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Whose turn it is and whether the game is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    player_count: usize,

    /// Seat whose turn it is.
    pub current: PlayerId,

    /// Turn number (starts at 1, bumped on every advance).
    pub turn_number: u32,

    pub game_over: bool,

    pub winner: Option<PlayerId>,
}

impl TurnState {
    /// Fresh state: seat 0 to throw, turn 1.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            current: PlayerId::new(0),
            turn_number: 1,
            game_over: false,
            winner: None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Move to the next seat, wrapping around.
    pub fn advance(&mut self) {
        let next = (self.current.index() + 1) % self.player_count;
        self.current = PlayerId::new(next as u8);
        self.turn_number += 1;
    }

    /// Move to the next seat for which `eligible` holds, wrapping around.
    ///
    /// Checks every other seat first and the current seat last. Returns
    /// `false` and leaves `current` unchanged when a full lap finds nobody.
    pub fn advance_to_eligible(&mut self, eligible: impl Fn(PlayerId) -> bool) -> bool {
        let start = self.current.index();
        for offset in 1..=self.player_count {
            let seat = PlayerId::new(((start + offset) % self.player_count) as u8);
            if eligible(seat) {
                self.current = seat;
                self.turn_number += 1;
                return true;
            }
        }
        false
    }

    /// End the game, optionally naming a winner.
    pub fn finish(&mut self, winner: Option<PlayerId>) {
        self.game_over = true;
        self.winner = winner;
    }
}

/// Status and event text published to the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub status: String,
    pub event: String,
}

impl Announcement {
    pub fn new(status: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            event: event.into(),
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn set_event(&mut self, event: impl Into<String>) {
        self.event = event.into();
    }

    /// Append to the current event line.
    pub fn push_event(&mut self, more: &str) {
        self.event.push_str(more);
    }
}
