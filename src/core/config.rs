//! Game selection and per-game options.
//!
//! - `VariantKind`: which rule-set to play, parsed from the ids the setup
//!   screen uses (`killer`, `cricket`, `301`, `501`, `snakes`).
//! - `GameOptions`: the recognized option keys. Keys a variant does not use
//!   are ignored by it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Rule-set discriminator.
///
/// ```
/// use darts_scoreboard::core::VariantKind;
///
/// assert_eq!("killer".parse::<VariantKind>().unwrap(), VariantKind::Killer);
/// assert_eq!("x01".parse::<VariantKind>().unwrap(), VariantKind::X301);
/// assert_eq!(VariantKind::SnakesAndLadders.to_string(), "snakes");
/// assert!("golf".parse::<VariantKind>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum VariantKind {
    #[strum(to_string = "killer")]
    #[serde(rename = "killer")]
    Killer,

    #[strum(to_string = "cricket")]
    #[serde(rename = "cricket")]
    Cricket,

    #[strum(to_string = "301", serialize = "x01")]
    #[serde(rename = "301", alias = "x01")]
    X301,

    #[strum(to_string = "501")]
    #[serde(rename = "501")]
    X501,

    #[strum(to_string = "snakes", serialize = "snakes-ladders")]
    #[serde(rename = "snakes", alias = "snakes-ladders")]
    SnakesAndLadders,
}

impl VariantKind {
    /// Title shown in the status line.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            VariantKind::Killer => "Killer",
            VariantKind::Cricket => "Cricket",
            VariantKind::X301 => "301",
            VariantKind::X501 => "501",
            VariantKind::SnakesAndLadders => "Snakes & Ladders",
        }
    }

    /// Starting score for the X01 family, `None` for other games.
    #[must_use]
    pub fn default_starting_score(self) -> Option<u32> {
        match self {
            VariantKind::X301 => Some(301),
            VariantKind::X501 => Some(501),
            _ => None,
        }
    }
}

/// Options chosen at game setup.
///
/// Deserializes from camelCase keys (`startingLives`, `hitsToKiller`,
/// `startAsKiller`, `startingScore`, `doubleOut`); missing keys take defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameOptions {
    /// Killer: lives each player starts with.
    pub starting_lives: u32,

    /// Killer: hits on your own number needed to become a killer.
    pub hits_to_killer: u32,

    /// Killer: everyone is a killer from the first dart.
    pub start_as_killer: bool,

    /// X01: overrides the variant's starting score (301 / 501).
    pub starting_score: Option<u32>,

    /// X01: the finishing dart must be a double.
    pub double_out: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            hits_to_killer: 1,
            start_as_killer: false,
            starting_score: None,
            double_out: false,
        }
    }
}

impl GameOptions {
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    #[must_use]
    pub fn with_hits_to_killer(mut self, hits: u32) -> Self {
        self.hits_to_killer = hits;
        self
    }

    #[must_use]
    pub fn with_start_as_killer(mut self, enabled: bool) -> Self {
        self.start_as_killer = enabled;
        self
    }

    #[must_use]
    pub fn with_starting_score(mut self, score: u32) -> Self {
        self.starting_score = Some(score);
        self
    }

    #[must_use]
    pub fn with_double_out(mut self, enabled: bool) -> Self {
        self.double_out = enabled;
        self
    }

    /// Starting score for an X01 game of the given kind.
    #[must_use]
    pub fn x01_starting_score(&self, kind: VariantKind) -> u32 {
        self.starting_score
            .or_else(|| kind.default_starting_score())
            .unwrap_or(301)
    }
}
