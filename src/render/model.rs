//! Per-variant board payloads.
//!
//! Each variant computes one of these from its state; the renderer draws it.
//! Everything here is plain data so the game logic stays independent of any
//! UI toolkit.

use serde::Serialize;

use crate::core::PlayerId;

/// Board payload for whichever variant is active.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "variant", content = "board", rename_all = "snake_case")]
pub enum RenderModel {
    Killer(KillerBoard),
    Cricket(CricketBoard),
    X01(X01Board),
    SnakesAndLadders(SnakesBoard),
}

/// Shown above the board once a game has a winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerBanner {
    pub name: String,
    /// Extra lines ("Score: 120", "Finished in 12 darts", ...).
    pub detail: Vec<String>,
}

// === Killer ===

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KillerBoard {
    pub rows: Vec<KillerRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KillerRow {
    pub id: PlayerId,
    pub name: String,
    pub number: u8,
    pub lives: i32,
    /// Lives at the start; the renderer draws lost lives greyed out.
    pub max_lives: u32,
    pub is_killer: bool,
    pub hits_on_own_number: u32,
    pub hits_to_killer: u32,
    pub eliminated: bool,
    pub active: bool,
}

// === Cricket ===

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CricketBoard {
    /// Column headers in play order ("20" .. "15", "Bull").
    pub numbers: Vec<String>,
    pub rows: Vec<CricketRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CricketRow {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub marks: Vec<MarkCell>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkCell {
    pub number: u8,
    pub marks: u8,
    pub closed: bool,
    /// "", "/", "//" or "X".
    pub glyph: &'static str,
}

// === X01 ===

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct X01Board {
    pub starting_score: u32,
    pub double_out: bool,
    pub rows: Vec<X01Row>,
    /// Running total of the turn in progress.
    pub turn_score: u32,
    pub turn_darts: Vec<TurnDartRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct X01Row {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub darts: u32,
    pub highest_score: u32,
    pub average: f64,
    pub checkouts: u32,
    /// Remaining score is under 170, i.e. finishable in one turn.
    pub checkout_range: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnDartRow {
    pub label: String,
    pub score: u32,
}

// === Snakes & Ladders ===

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakesBoard {
    /// Ten rows of ten cells, top row first, serpentine order.
    pub layout: Vec<Vec<SnakesCell>>,
    pub rows: Vec<SnakesRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakesCell {
    pub space: u8,
    pub snake_to: Option<u8>,
    pub ladder_to: Option<u8>,
    pub occupants: Vec<PlayerId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakesRow {
    pub id: PlayerId,
    pub name: String,
    pub position: u8,
    pub color: &'static str,
    pub total_score: u32,
    pub darts: u32,
    pub active: bool,
}
