//! Snakes & Ladders implementation.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::{Announcement, Player, PlayerId, PlayerMap, Segment, TurnState, VariantKind};
use crate::render::{RenderModel, SnakesBoard, SnakesCell, SnakesRow, WinnerBanner};
use crate::rules::{GameResult, GameVariant};

/// Last space on the board.
pub const BOARD_SIZE: u8 = 100;

/// Snake heads and the tails they slide down to.
pub const SNAKES: [(u8, u8); 12] = [
    (98, 28),
    (95, 24),
    (92, 51),
    (83, 19),
    (73, 1),
    (69, 33),
    (64, 36),
    (62, 18),
    (54, 31),
    (48, 9),
    (37, 3),
    (17, 7),
];

/// Ladder bottoms and the tops they climb to.
///
/// 62 is also a snake head; the snake wins.
pub const LADDERS: [(u8, u8); 10] = [
    (4, 25),
    (13, 46),
    (20, 70),
    (27, 84),
    (33, 49),
    (40, 77),
    (50, 91),
    (62, 96),
    (71, 89),
    (79, 81),
];

/// Token colors, assigned by seat.
pub const PLAYER_COLORS: [&str; 8] = [
    "#00ff88", "#00aaff", "#ff00ff", "#ffaa00", "#ff4444", "#44ff44", "#ff8800", "#8800ff",
];

/// Snakes & Ladders player record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakesPlayer {
    pub player: Player,
    /// 0 (off the board) to 100.
    pub position: u8,
    pub color: &'static str,
    pub total_score: u32,
    pub darts: u32,
}

/// Snakes & Ladders game state.
#[derive(Clone, Debug)]
pub struct SnakesAndLaddersGame {
    players: PlayerMap<SnakesPlayer>,
    turn: TurnState,
    snakes: FxHashMap<u8, u8>,
    ladders: FxHashMap<u8, u8>,
    announcement: Announcement,
}

impl SnakesAndLaddersGame {
    pub fn new(names: &[String]) -> Self {
        let players = PlayerMap::new(names.len(), |id| SnakesPlayer {
            player: Player::new(id, names[id.index()].clone()),
            position: 0,
            color: PLAYER_COLORS[id.index() % PLAYER_COLORS.len()],
            total_score: 0,
            darts: 0,
        });

        Self {
            turn: TurnState::new(players.player_count()),
            players,
            snakes: SNAKES.into_iter().collect(),
            ladders: LADDERS.into_iter().collect(),
            announcement: Announcement::default(),
        }
    }

    pub fn player(&self, id: PlayerId) -> &SnakesPlayer {
        &self.players[id]
    }

    /// Put a player on a given space. Setup helper for drills and tests.
    pub fn place(&mut self, id: PlayerId, position: u8) {
        self.players[id].position = position.min(BOARD_SIZE);
    }

    /// Board spaces as displayed: ten rows, top row first, alternating
    /// direction so consecutive spaces stay adjacent.
    #[must_use]
    pub fn layout() -> Vec<Vec<u8>> {
        (0..10u8)
            .rev()
            .map(|row| {
                let spaces = (row * 10 + 1)..=(row * 10 + 10);
                if row % 2 == 0 {
                    spaces.collect()
                } else {
                    spaces.rev().collect()
                }
            })
            .collect()
    }
}

impl GameVariant for SnakesAndLaddersGame {
    fn kind(&self) -> VariantKind {
        VariantKind::SnakesAndLadders
    }

    fn start(&mut self) {
        let name = self.player_name(self.turn.current).to_string();
        self.announcement =
            Announcement::new("Snakes & Ladders - In Progress", format!("{name}'s turn"));
    }

    fn process_throw(&mut self, segment: &Segment) {
        if self.turn.game_over {
            return;
        }

        let score = segment.score();
        let record = &mut self.players[self.turn.current];
        record.total_score += score;
        record.darts += 1;

        let landed = (u32::from(record.position) + score).min(u32::from(BOARD_SIZE)) as u8;
        record.position = landed;
        let mut event = format!(
            "{} scored {}! Moved to space {}",
            record.player.name, score, landed
        );

        if let Some(&tail) = self.snakes.get(&landed) {
            event.push_str(&format!(" Snake! Slid down to {tail}"));
            record.position = tail;
        } else if let Some(&top) = self.ladders.get(&landed) {
            event.push_str(&format!(" Ladder! Climbed up to {top}"));
            record.position = top;
        }

        debug!(
            player = %record.player.name,
            score,
            landed,
            position = record.position,
            "snakes dart"
        );
        self.announcement.set_event(event);

        self.check_winner();
    }

    fn next_player(&mut self) {
        if self.turn.game_over {
            return;
        }

        self.turn.advance();
        let next = &self.players[self.turn.current];
        let event = format!("{}'s turn - Position: {}", next.player.name, next.position);
        self.announcement.set_event(event);
    }

    fn check_winner(&mut self) -> Option<GameResult> {
        if self.turn.game_over {
            return self.result();
        }

        let current = self.turn.current;
        if self.players[current].position != BOARD_SIZE {
            return None;
        }

        self.turn.finish(Some(current));
        let record = &self.players[current];
        info!(winner = %record.player.name, darts = record.darts, "snakes game won");
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
        let layout = Self::layout()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|space| SnakesCell {
                        space,
                        snake_to: self.snakes.get(&space).copied(),
                        ladder_to: self.ladders.get(&space).copied(),
                        occupants: self
                            .players
                            .iter()
                            .filter(|(_, p)| p.position == space)
                            .map(|(id, _)| id)
                            .collect(),
                    })
                    .collect()
            })
            .collect();

        let rows = self
            .players
            .iter()
            .map(|(id, p)| SnakesRow {
                id,
                name: p.player.name.clone(),
                position: p.position,
                color: p.color,
                total_score: p.total_score,
                darts: p.darts,
                active: id == self.turn.current,
            })
            .collect();

        RenderModel::SnakesAndLadders(SnakesBoard { layout, rows })
    }

    fn winner_banner(&self) -> Option<WinnerBanner> {
        let winner = self.turn.winner?;
        let record = &self.players[winner];
        Some(WinnerBanner {
            name: record.player.name.clone(),
            detail: vec![
                format!("Reached space {} in {} darts!", BOARD_SIZE, record.darts),
                format!("Total Score: {}", record.total_score),
            ],
        })
    }

    fn player_name(&self, player: PlayerId) -> &str {
        &self.players[player].player.name
    }
}
