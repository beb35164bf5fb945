//! Command-line interface for darts-scoreboard.

use std::path::PathBuf;

use clap::Parser;
use darts_scoreboard::GameOptions;

/// Darts Scoreboard - scores dart games from a sensor feed
///
/// Reads feed messages (one JSON object per line) and prints a render frame
/// as a JSON line after every change.
#[derive(Parser, Debug)]
#[command(name = "darts-scoreboard")]
#[command(version)]
pub struct Cli {
    /// Game to start: killer, cricket, 301, 501, snakes
    #[arg(short, long)]
    pub variant: Option<String>,

    /// Player name, in seat order (repeat for each player)
    #[arg(short, long = "player")]
    pub players: Vec<String>,

    /// Killer: lives per player
    #[arg(long)]
    pub starting_lives: Option<u32>,

    /// Killer: own-number hits needed to become a killer
    #[arg(long)]
    pub hits_to_killer: Option<u32>,

    /// Killer: everyone starts as a killer
    #[arg(long)]
    pub start_as_killer: bool,

    /// X01: starting score (defaults to 301 or 501)
    #[arg(long)]
    pub starting_score: Option<u32>,

    /// X01: the finishing dart must be a double
    #[arg(long)]
    pub double_out: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RNG seed, overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Feed file to replay (reads stdin when absent)
    #[arg(long)]
    pub feed: Option<PathBuf>,
}

impl Cli {
    /// Layer the option flags over `base` (the config file's options).
    pub fn game_options(&self, base: GameOptions) -> GameOptions {
        let mut options = base;
        if let Some(lives) = self.starting_lives {
            options = options.with_starting_lives(lives);
        }
        if let Some(hits) = self.hits_to_killer {
            options = options.with_hits_to_killer(hits);
        }
        if let Some(score) = self.starting_score {
            options = options.with_starting_score(score);
        }
        if self.start_as_killer {
            options = options.with_start_as_killer(true);
        }
        if self.double_out {
            options = options.with_double_out(true);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_flags() {
        let cli = Cli::parse_from([
            "darts-scoreboard",
            "--variant",
            "501",
            "-p",
            "Ann",
            "--player",
            "Bob",
            "--double-out",
            "--starting-score",
            "301",
        ]);

        assert_eq!(cli.variant.as_deref(), Some("501"));
        assert_eq!(cli.players, vec!["Ann".to_string(), "Bob".to_string()]);

        let options = cli.game_options(GameOptions::default().with_starting_lives(5));
        assert!(options.double_out);
        assert_eq!(options.starting_score, Some(301));
        assert_eq!(options.starting_lives, 5);
        assert!(!options.start_as_killer);
    }
}
