//! The complete render-facing view of a session at one instant.

use serde::Serialize;

use super::model::{RenderModel, WinnerBanner};
use crate::core::{Coords, ThrowEvent};
use crate::feed::{FeedSnapshot, MotionState};

/// Everything the UI needs to redraw after a mutation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub status: String,
    pub event: String,
    /// Variant board, `None` when no game is active.
    pub board: Option<RenderModel>,
    pub winner: Option<WinnerBanner>,
    /// Darts of the current sensor leg, game or not.
    pub leg: LegView,
    pub motion: MotionState,
}

/// Throw list of the current sensor leg with its running total.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegView {
    pub throws: Vec<ThrowRow>,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowRow {
    pub label: String,
    pub bed: String,
    pub multiplier: u8,
    pub score: u32,
    pub coords: Coords,
}

impl From<&ThrowEvent> for ThrowRow {
    fn from(throw: &ThrowEvent) -> Self {
        Self {
            label: throw.segment.label(),
            bed: throw.segment.bed.clone(),
            multiplier: throw.segment.multiplier,
            score: throw.segment.score(),
            coords: throw.coords,
        }
    }
}

impl LegView {
    pub fn from_snapshot(snapshot: &FeedSnapshot) -> Self {
        Self {
            throws: snapshot.throws.iter().map(ThrowRow::from).collect(),
            total: snapshot.leg_total(),
        }
    }
}
