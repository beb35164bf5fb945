//! Cricket implementation.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::{
    Announcement, Player, PlayerId, PlayerMap, Segment, TurnState, VariantKind, BULL,
};
use crate::render::{CricketBoard, CricketRow, MarkCell, RenderModel, WinnerBanner};
use crate::rules::{GameResult, GameVariant};

/// Numbers in play, in board column order.
pub const CRICKET_NUMBERS: [u8; 7] = [20, 19, 18, 17, 16, 15, BULL];

/// Marks needed to close a number.
pub const MARKS_TO_CLOSE: u8 = 3;

/// Marks are stored up to this value; beyond it only scoring changes.
pub const MARK_CAP: u8 = 6;

/// Cricket player record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CricketPlayer {
    pub player: Player,
    /// Marks per in-play number, 0..=6.
    pub marks: FxHashMap<u8, u8>,
    pub score: u32,
}

impl CricketPlayer {
    fn new(player: Player) -> Self {
        Self {
            player,
            marks: CRICKET_NUMBERS.iter().map(|&n| (n, 0)).collect(),
            score: 0,
        }
    }

    /// Marks on `number` (0 for numbers not in play).
    #[must_use]
    pub fn marks_on(&self, number: u8) -> u8 {
        self.marks.get(&number).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_closed(&self, number: u8) -> bool {
        self.marks_on(number) >= MARKS_TO_CLOSE
    }

    #[must_use]
    pub fn all_closed(&self) -> bool {
        CRICKET_NUMBERS.iter().all(|&n| self.is_closed(n))
    }
}

/// Cricket game state.
#[derive(Clone, Debug)]
pub struct CricketGame {
    players: PlayerMap<CricketPlayer>,
    turn: TurnState,
    announcement: Announcement,
}

impl CricketGame {
    pub fn new(names: &[String]) -> Self {
        let players = PlayerMap::new(names.len(), |id| {
            CricketPlayer::new(Player::new(id, names[id.index()].clone()))
        });
        Self {
            turn: TurnState::new(players.player_count()),
            players,
            announcement: Announcement::default(),
        }
    }

    pub fn player(&self, id: PlayerId) -> &CricketPlayer {
        &self.players[id]
    }

    pub fn players(&self) -> &PlayerMap<CricketPlayer> {
        &self.players
    }

    /// Whether any active opponent of `player` still has `number` open.
    fn opponents_open(&self, player: PlayerId, number: u8) -> bool {
        self.players
            .iter()
            .any(|(id, p)| id != player && !p.player.eliminated && !p.is_closed(number))
    }
}

impl GameVariant for CricketGame {
    fn kind(&self) -> VariantKind {
        VariantKind::Cricket
    }

    fn start(&mut self) {
        let name = self.player_name(self.turn.current).to_string();
        self.announcement = Announcement::new("Cricket - In Progress", format!("{name}'s turn"));
    }

    fn process_throw(&mut self, segment: &Segment) {
        if self.turn.game_over {
            return;
        }

        let number = segment.number;
        if !CRICKET_NUMBERS.contains(&number) {
            debug!(number, "cricket dart outside the numbers in play");
            return;
        }

        let current = self.turn.current;
        let added = segment.multiplier;
        let prior = self.players[current].marks_on(number);

        // Only darts on an already-closed number score, and only while an
        // opponent can still be scored against.
        let points = if prior >= MARKS_TO_CLOSE && self.opponents_open(current, number) {
            u32::from(number) * u32::from(added)
        } else {
            0
        };

        let record = &mut self.players[current];
        record.marks.insert(number, prior.saturating_add(added).min(MARK_CAP));
        record.score += points;
        debug!(
            player = %record.player.name,
            number,
            marks = record.marks_on(number),
            points,
            "cricket dart"
        );

        let mut event = format!("{} hit {}!", record.player.name, segment.label());
        if points > 0 {
            event.push_str(&format!(" +{points}"));
        }
        self.announcement.set_event(event);

        self.check_winner();
    }

    fn next_player(&mut self) {
        if self.turn.game_over {
            return;
        }

        self.turn.advance();
        let name = self.player_name(self.turn.current).to_string();
        self.announcement.set_event(format!("{name}'s turn"));
    }

    /// First player in seat order with every number closed and a score no
    /// lower than anyone else's wins.
    fn check_winner(&mut self) -> Option<GameResult> {
        if self.turn.game_over {
            return self.result();
        }

        let highest = self
            .players
            .values()
            .filter(|p| !p.player.eliminated)
            .map(|p| p.score)
            .max()
            .unwrap_or(0);

        let winner = self
            .players
            .iter()
            .find(|(_, p)| !p.player.eliminated && p.all_closed() && p.score >= highest)
            .map(|(id, _)| id)?;

        self.turn.finish(Some(winner));
        let name = self.player_name(winner).to_string();
        info!(winner = %name, score = self.players[winner].score, "cricket game won");
        self.announcement = Announcement::new("Game Over", format!("{name} is the champion!"));
        Some(GameResult::Winner(winner))
    }

    fn turn(&self) -> &TurnState {
        &self.turn
    }

    fn announcement(&self) -> &Announcement {
        &self.announcement
    }

    fn render(&self) -> RenderModel {
        let numbers = CRICKET_NUMBERS
            .iter()
            .map(|&n| if n == BULL { "Bull".to_string() } else { n.to_string() })
            .collect();

        let rows = self
            .players
            .iter()
            .map(|(id, p)| CricketRow {
                id,
                name: p.player.name.clone(),
                score: p.score,
                marks: CRICKET_NUMBERS
                    .iter()
                    .map(|&number| {
                        let marks = p.marks_on(number);
                        MarkCell {
                            number,
                            marks,
                            closed: marks >= MARKS_TO_CLOSE,
                            glyph: match marks {
                                0 => "",
                                1 => "/",
                                2 => "//",
                                _ => "X",
                            },
                        }
                    })
                    .collect(),
                active: id == self.turn.current,
            })
            .collect();

        RenderModel::Cricket(CricketBoard { numbers, rows })
    }

    fn winner_banner(&self) -> Option<WinnerBanner> {
        let winner = self.turn.winner?;
        Some(WinnerBanner {
            name: self.player_name(winner).to_string(),
            detail: vec![format!("Score: {}", self.players[winner].score)],
        })
    }

    fn player_name(&self, player: PlayerId) -> &str {
        &self.players[player].player.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> CricketGame {
        let mut game = CricketGame::new(&["Ann".to_string(), "Bob".to_string()]);
        game.start();
        game
    }

    const ANN: PlayerId = PlayerId::new(0);
    const BOB: PlayerId = PlayerId::new(1);

    #[test]
    fn test_ignores_numbers_out_of_play() {
        let mut game = game();
        game.process_throw(&Segment::treble(14));
        assert!(CRICKET_NUMBERS.iter().all(|&n| game.player(ANN).marks_on(n) == 0));
        assert_eq!(game.announcement().event, "Ann's turn");
    }

    #[test]
    fn test_closing_does_not_score() {
        let mut game = game();
        game.process_throw(&Segment::treble(20));
        assert!(game.player(ANN).is_closed(20));
        assert_eq!(game.player(ANN).score, 0);
    }

    #[test]
    fn test_scores_on_closed_number_while_opponent_open() {
        let mut game = game();
        game.process_throw(&Segment::treble(20));
        game.process_throw(&Segment::single(20));
        assert_eq!(game.player(ANN).score, 20);
        assert_eq!(game.player(ANN).marks_on(20), 4);
        assert_eq!(game.announcement().event, "Ann hit S20! +20");
    }

    #[test]
    fn test_no_score_once_everyone_closed() {
        let mut game = game();
        game.process_throw(&Segment::treble(19));
        game.next_player();
        game.process_throw(&Segment::treble(19));
        game.next_player();

        game.process_throw(&Segment::treble(19));
        assert_eq!(game.player(ANN).score, 0);
    }

    #[test]
    fn test_closing_dart_never_scores_its_overflow() {
        let mut game = game();
        game.process_throw(&Segment::double(20));
        game.process_throw(&Segment::treble(20));
        assert_eq!(game.player(ANN).marks_on(20), 5);
        assert_eq!(game.player(ANN).score, 0);
        assert_eq!(game.announcement().event, "Ann hit T20!");
    }

    #[test]
    fn test_marks_capped() {
        let mut game = game();
        for _ in 0..3 {
            game.process_throw(&Segment::treble(18));
        }
        assert_eq!(game.player(ANN).marks_on(18), MARK_CAP);
        assert_eq!(game.player(ANN).score, 18 * 3 * 2);
    }

    #[test]
    fn test_bull_multiplier_is_marks() {
        let mut game = game();
        game.process_throw(&Segment::double(BULL));
        assert_eq!(game.player(ANN).marks_on(BULL), 2);
        game.process_throw(&Segment::single(BULL));
        assert!(game.player(ANN).is_closed(BULL));
    }

    #[test]
    fn test_win_requires_all_closed_and_top_score() {
        let mut game = game();

        // Bob builds a lead on 20 first.
        game.next_player();
        game.process_throw(&Segment::treble(20));
        game.process_throw(&Segment::treble(20));
        assert_eq!(game.player(BOB).score, 60);
        game.next_player();

        for number in CRICKET_NUMBERS {
            let dart = if number == BULL {
                Segment::double(BULL)
            } else {
                Segment::treble(number)
            };
            game.process_throw(&dart);
        }
        game.process_throw(&Segment::single(BULL));
        assert!(game.player(ANN).all_closed());
        assert!(!game.is_over(), "Ann trails on points");

        // Bob still has 19 open, so Ann can score her way past him.
        game.process_throw(&Segment::treble(19));
        assert_eq!(game.player(ANN).score, 57);
        game.process_throw(&Segment::single(19));
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(ANN));
        assert_eq!(game.announcement().status, "Game Over");
        assert_eq!(
            game.winner_banner().unwrap().detail,
            vec!["Score: 76".to_string()]
        );
    }

    #[test]
    fn test_render_glyphs() {
        let mut game = game();
        game.process_throw(&Segment::double(17));
        let RenderModel::Cricket(board) = game.render() else {
            panic!("expected cricket board");
        };
        assert_eq!(board.numbers.last().map(String::as_str), Some("Bull"));
        let cell = &board.rows[0].marks[3];
        assert_eq!(cell.number, 17);
        assert_eq!(cell.glyph, "//");
        assert!(!cell.closed);
    }
}
