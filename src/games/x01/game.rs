//! X01 implementation.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{
    Announcement, GameOptions, Player, PlayerId, PlayerMap, Segment, TurnState, VariantKind,
};
use crate::render::{RenderModel, TurnDartRow, WinnerBanner, X01Board, X01Row};
use crate::rules::{GameResult, GameVariant};

/// Scores below this can be finished in a single turn.
pub const CHECKOUT_RANGE: u32 = 170;

/// X01 player record.
#[derive(Clone, Debug, PartialEq)]
pub struct X01Player {
    pub player: Player,
    /// Points still needed.
    pub score: u32,
    /// Darts thrown, busted turns included.
    pub darts: u32,
    /// Best committed turn.
    pub highest_score: u32,
    /// Three-dart average, rounded to 2 decimals.
    pub average: f64,
    pub checkouts: u32,
}

/// One dart of the turn in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnDart {
    pub segment: Segment,
    pub score: u32,
}

/// X01 game state.
///
/// The turn accumulator belongs to the game, not to a player: only the
/// current player can be accruing darts.
#[derive(Clone, Debug)]
pub struct X01Game {
    kind: VariantKind,
    players: PlayerMap<X01Player>,
    turn: TurnState,
    starting_score: u32,
    double_out: bool,
    current_turn_score: u32,
    current_turn_darts: SmallVec<[TurnDart; 3]>,
    announcement: Announcement,
}

impl X01Game {
    /// Create a 301 or 501 game. `options.starting_score` overrides the
    /// variant's default.
    pub fn new(kind: VariantKind, names: &[String], options: &GameOptions) -> Self {
        let starting_score = options.x01_starting_score(kind);
        let players = PlayerMap::new(names.len(), |id| X01Player {
            player: Player::new(id, names[id.index()].clone()),
            score: starting_score,
            darts: 0,
            highest_score: 0,
            average: 0.0,
            checkouts: 0,
        });

        Self {
            kind,
            turn: TurnState::new(players.player_count()),
            players,
            starting_score,
            double_out: options.double_out,
            current_turn_score: 0,
            current_turn_darts: SmallVec::new(),
            announcement: Announcement::default(),
        }
    }

    pub fn player(&self, id: PlayerId) -> &X01Player {
        &self.players[id]
    }

    pub fn starting_score(&self) -> u32 {
        self.starting_score
    }

    pub fn current_turn_score(&self) -> u32 {
        self.current_turn_score
    }

    pub fn current_turn_darts(&self) -> &[TurnDart] {
        &self.current_turn_darts
    }

    /// Whether committing the current turn would bust.
    fn is_bust(&self, remaining: u32) -> bool {
        if self.current_turn_score > remaining {
            return true;
        }
        let finishes = self.current_turn_score == remaining;
        let last_is_double = self
            .current_turn_darts
            .last()
            .is_some_and(|dart| dart.segment.is_double());
        self.double_out && finishes && !last_is_double
    }

    fn reset_turn(&mut self) {
        self.current_turn_score = 0;
        self.current_turn_darts.clear();
    }
}

/// Three-dart average rounded to 2 decimals.
fn three_dart_average(scored: u32, darts: u32) -> f64 {
    if darts == 0 {
        return 0.0;
    }
    let average = f64::from(scored) / f64::from(darts) * 3.0;
    (average * 100.0).round() / 100.0
}

impl GameVariant for X01Game {
    fn kind(&self) -> VariantKind {
        self.kind
    }

    fn start(&mut self) {
        let name = self.player_name(self.turn.current).to_string();
        self.announcement = Announcement::new(
            format!("{} - In Progress", self.starting_score),
            format!("{name}'s turn"),
        );
    }

    fn process_throw(&mut self, segment: &Segment) {
        if self.turn.game_over {
            return;
        }

        let score = segment.score();
        self.current_turn_darts.push(TurnDart {
            segment: segment.clone(),
            score,
        });
        self.current_turn_score += score;

        let record = &mut self.players[self.turn.current];
        record.darts += 1;
        debug!(
            player = %record.player.name,
            score,
            turn_total = self.current_turn_score,
            "x01 dart"
        );

        self.announcement.set_event(format!(
            "{} scored {}! Turn total: {}",
            record.player.name, score, self.current_turn_score
        ));
    }

    fn next_player(&mut self) {
        if self.turn.game_over {
            return;
        }

        let current = self.turn.current;
        let remaining = self.players[current].score;

        if self.is_bust(remaining) {
            let name = self.player_name(current).to_string();
            info!(player = %name, turn_total = self.current_turn_score, "bust");
            self.announcement
                .set_event(format!("{name} BUST! Score stays at {remaining}"));
        } else {
            let turn_score = self.current_turn_score;
            let starting_score = self.starting_score;
            let record = &mut self.players[current];
            record.score = remaining - turn_score;
            record.highest_score = record.highest_score.max(turn_score);
            record.average = three_dart_average(starting_score - record.score, record.darts);

            if record.score == 0 {
                record.checkouts += 1;
                self.check_winner();
                return;
            }
        }

        self.reset_turn();
        self.turn.advance();

        let next = &self.players[self.turn.current];
        let event = format!("{}'s turn - {} remaining", next.player.name, next.score);
        self.announcement.set_event(event);
    }

    fn check_winner(&mut self) -> Option<GameResult> {
        if self.turn.game_over {
            return self.result();
        }

        let current = self.turn.current;
        if self.players[current].score != 0 {
            return None;
        }

        self.turn.finish(Some(current));
        let record = &self.players[current];
        info!(
            winner = %record.player.name,
            darts = record.darts,
            average = record.average,
            "x01 game won"
        );
        let event = format!("{} is the champion!", record.player.name);
        self.announcement = Announcement::new("Game Over", event);
        Some(GameResult::Winner(current))
    }

    fn turn(&self) -> &TurnState {
        &self.turn
    }

    fn announcement(&self) -> &Announcement {
        &self.announcement
    }

    fn render(&self) -> RenderModel {
        let rows = self
            .players
            .iter()
            .map(|(id, p)| X01Row {
                id,
                name: p.player.name.clone(),
                score: p.score,
                darts: p.darts,
                highest_score: p.highest_score,
                average: p.average,
                checkouts: p.checkouts,
                checkout_range: p.score < CHECKOUT_RANGE,
                active: id == self.turn.current,
            })
            .collect();

        RenderModel::X01(X01Board {
            starting_score: self.starting_score,
            double_out: self.double_out,
            rows,
            turn_score: self.current_turn_score,
            turn_darts: self
                .current_turn_darts
                .iter()
                .map(|dart| TurnDartRow {
                    label: dart.segment.label(),
                    score: dart.score,
                })
                .collect(),
        })
    }

    fn winner_banner(&self) -> Option<WinnerBanner> {
        let winner = self.turn.winner?;
        let record = &self.players[winner];
        Some(WinnerBanner {
            name: record.player.name.clone(),
            detail: vec![
                format!("Finished in {} darts", record.darts),
                format!("Average: {:.2}", record.average),
            ],
        })
    }

    fn player_name(&self, player: PlayerId) -> &str {
        &self.players[player].player.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANN: PlayerId = PlayerId::new(0);
    const BOB: PlayerId = PlayerId::new(1);

    fn game(options: GameOptions) -> X01Game {
        let names = ["Ann".to_string(), "Bob".to_string()];
        let mut game = X01Game::new(VariantKind::X301, &names, &options);
        game.start();
        game
    }

    fn throw_turn(game: &mut X01Game, darts: &[Segment]) {
        for dart in darts {
            game.process_throw(dart);
        }
        game.next_player();
    }

    #[test]
    fn test_start() {
        let game = game(GameOptions::default());
        assert_eq!(game.player(ANN).score, 301);
        assert_eq!(game.announcement().status, "301 - In Progress");
    }

    #[test]
    fn test_501_and_override() {
        let names = ["Ann".to_string(), "Bob".to_string()];
        let g = X01Game::new(VariantKind::X501, &names, &GameOptions::default());
        assert_eq!(g.starting_score(), 501);

        let g = X01Game::new(
            VariantKind::X501,
            &names,
            &GameOptions::default().with_starting_score(101),
        );
        assert_eq!(g.player(BOB).score, 101);
    }

    #[test]
    fn test_throws_accumulate_without_commit() {
        let mut game = game(GameOptions::default());
        game.process_throw(&Segment::treble(20));
        game.process_throw(&Segment::single(5));

        assert_eq!(game.current_turn_score(), 65);
        assert_eq!(game.current_turn_darts().len(), 2);
        assert_eq!(game.player(ANN).score, 301);
        assert_eq!(game.player(ANN).darts, 2);
        assert_eq!(game.current_player(), ANN);
    }

    #[test]
    fn test_commit_updates_stats() {
        let mut game = game(GameOptions::default());
        throw_turn(
            &mut game,
            &[Segment::treble(20), Segment::treble(20), Segment::single(20)],
        );

        let ann = game.player(ANN);
        assert_eq!(ann.score, 161);
        assert_eq!(ann.highest_score, 140);
        assert_eq!(ann.average, 140.0);
        assert_eq!(game.current_player(), BOB);
        assert_eq!(game.current_turn_score(), 0);
        assert_eq!(game.announcement().event, "Bob's turn - 301 remaining");
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        assert_eq!(three_dart_average(100, 7), 42.86);
        assert_eq!(three_dart_average(0, 0), 0.0);
    }

    #[test]
    fn test_bust_leaves_score() {
        let mut game = game(GameOptions::default().with_starting_score(40));
        throw_turn(&mut game, &[Segment::treble(20)]);

        assert_eq!(game.player(ANN).score, 40);
        assert_eq!(game.player(ANN).darts, 1);
        assert_eq!(game.current_player(), BOB);
    }

    #[test]
    fn test_double_out_requires_double() {
        let options = GameOptions::default()
            .with_starting_score(40)
            .with_double_out(true);
        let mut game = game(options);

        throw_turn(&mut game, &[Segment::single(20), Segment::single(20)]);
        assert_eq!(game.player(ANN).score, 40);
        assert!(!game.is_over());

        throw_turn(&mut game, &[Segment::miss()]);

        game.process_throw(&Segment::double(20));
        game.next_player();
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(ANN));
        assert_eq!(game.player(ANN).checkouts, 1);
    }

    #[test]
    fn test_checkout_wins_without_advancing() {
        let mut game = game(GameOptions::default().with_starting_score(60));
        throw_turn(&mut game, &[Segment::treble(20)]);

        assert!(game.is_over());
        assert_eq!(game.winner(), Some(ANN));
        assert_eq!(game.current_player(), ANN);
        assert_eq!(game.announcement().event, "Ann is the champion!");

        let banner = game.winner_banner().unwrap();
        assert_eq!(banner.detail[0], "Finished in 1 darts");
        assert_eq!(banner.detail[1], "Average: 180.00");
    }

    #[test]
    fn test_render_turn_in_progress() {
        let mut game = game(GameOptions::default());
        game.process_throw(&Segment::double(16));
        let RenderModel::X01(board) = game.render() else {
            panic!("expected x01 board");
        };
        assert_eq!(board.turn_score, 32);
        assert_eq!(board.turn_darts[0].label, "D16");
        assert!(!board.rows[0].checkout_range);
    }
}
