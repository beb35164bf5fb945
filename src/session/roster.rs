//! Players entered on the setup screen, before a game exists.

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 8;

/// Stable handle for a roster entry, independent of its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RosterId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: RosterId,
    pub name: String,
}

/// Ordered setup list. Seat order in the game is roster order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player. The name is trimmed.
    pub fn add(&mut self, name: &str) -> Result<RosterId, SetupError> {
        let name = normalize_name(name)?;
        if self.entries.len() >= MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(self.entries.len() + 1));
        }

        let id = RosterId(self.next_id);
        self.next_id += 1;
        self.entries.push(RosterEntry { id, name });
        Ok(id)
    }

    /// Remove a player. Returns whether anything was removed.
    pub fn remove(&mut self, id: RosterId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether there are enough players to start.
    pub fn is_ready(&self) -> bool {
        self.entries.len() >= MIN_PLAYERS
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Trim a player name, rejecting blank ones.
pub fn normalize_name(name: &str) -> Result<String, SetupError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SetupError::EmptyName);
    }
    Ok(name.to_string())
}
