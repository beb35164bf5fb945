//! Cricket.
//!
//! - Numbers 20 down to 15 and the bull are in play
//! - Three marks close a number (treble = 3 marks, inner bull = 2)
//! - Hitting a closed number scores while an opponent still has it open
//! - Close everything with the top score to win

mod game;

pub use game::{CricketGame, CricketPlayer, CRICKET_NUMBERS, MARKS_TO_CLOSE, MARK_CAP};
