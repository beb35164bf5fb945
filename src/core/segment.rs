//! Dart landing vocabulary shared by the feed and every variant.
//!
//! A `Segment` is produced by the sensor service and never modified here.
//! Numbers run 0..=25: 0 is a miss, 1..=20 the board numbers, 25 the bull.
//! Outer bull is `25 × 1`, inner bull (bullseye) is `25 × 2`.

use serde::{Deserialize, Serialize};

/// Board number of the bull.
pub const BULL: u8 = 25;

/// The twenty scoring numbers in clockwise board order, starting at the top.
pub const BOARD_NUMBERS: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Where a single dart landed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Board number, 0 for a miss.
    pub number: u8,
    /// 0 (miss), 1 (single), 2 (double), 3 (treble).
    pub multiplier: u8,
    /// Human label, e.g. "T20" or "Bull".
    #[serde(default)]
    pub name: String,
    /// Bed label as reported by the sensor, e.g. "Triple".
    #[serde(default)]
    pub bed: String,
}

impl Segment {
    /// Build a segment with a generated label.
    pub fn new(number: u8, multiplier: u8) -> Self {
        let name = match (number, multiplier) {
            (_, 0) | (0, _) => "Miss".to_string(),
            (BULL, 1) => "25".to_string(),
            (BULL, _) => "Bull".to_string(),
            (n, 1) => format!("S{n}"),
            (n, 2) => format!("D{n}"),
            (n, _) => format!("T{n}"),
        };
        let bed = match multiplier {
            0 => "Outside",
            1 => "Single",
            2 => "Double",
            _ => "Triple",
        };
        Self {
            number,
            multiplier,
            name,
            bed: bed.to_string(),
        }
    }

    /// Single of `number`.
    pub fn single(number: u8) -> Self {
        Self::new(number, 1)
    }

    /// Double of `number`.
    pub fn double(number: u8) -> Self {
        Self::new(number, 2)
    }

    /// Treble of `number`.
    pub fn treble(number: u8) -> Self {
        Self::new(number, 3)
    }

    /// A dart that scored nothing.
    pub fn miss() -> Self {
        Self::new(0, 0)
    }

    /// Points scored: `number × multiplier`.
    #[must_use]
    pub fn score(&self) -> u32 {
        u32::from(self.number) * u32::from(self.multiplier)
    }

    #[must_use]
    pub fn is_miss(&self) -> bool {
        self.number == 0 || self.multiplier == 0
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.multiplier == 2
    }

    /// Label to show in messages, falling back to a generated one.
    #[must_use]
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            Segment::new(self.number, self.multiplier).name
        } else {
            self.name.clone()
        }
    }
}

/// Board-relative landing position, each axis in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

/// One scored dart as reported by the feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrowEvent {
    pub segment: Segment,
    #[serde(default)]
    pub coords: Coords,
}

impl ThrowEvent {
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            coords: Coords::default(),
        }
    }
}
