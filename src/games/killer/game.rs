//! Killer implementation.

use tracing::{debug, info};

use crate::core::{
    Announcement, GameOptions, GameRng, Player, PlayerId, PlayerMap, Segment, TurnState,
    VariantKind, BOARD_NUMBERS,
};
use crate::render::{KillerBoard, KillerRow, RenderModel, WinnerBanner};
use crate::rules::{GameResult, GameVariant};

/// Killer player record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KillerPlayer {
    pub player: Player,
    /// Board number assigned at setup, unique per game.
    pub number: u8,
    /// May go below zero when a treble takes more lives than are left.
    pub lives: i32,
    pub is_killer: bool,
    /// Saturates at `hits_to_killer`.
    pub hits_on_own_number: u32,
}

/// Killer game state.
#[derive(Clone, Debug)]
pub struct KillerGame {
    players: PlayerMap<KillerPlayer>,
    turn: TurnState,
    starting_lives: u32,
    hits_to_killer: u32,
    announcement: Announcement,
}

impl KillerGame {
    /// Seat the players and deal them distinct board numbers.
    ///
    /// Numbers are drawn from a shuffled copy of the twenty board numbers,
    /// so at most twenty players are supported.
    pub fn new(names: &[String], options: &GameOptions, rng: &mut GameRng) -> Self {
        assert!(
            names.len() <= BOARD_NUMBERS.len(),
            "Killer supports at most 20 players"
        );

        let mut numbers = BOARD_NUMBERS;
        rng.shuffle(&mut numbers);

        let hits_to_killer = options.hits_to_killer;
        let players = PlayerMap::new(names.len(), |id| KillerPlayer {
            player: Player::new(id, names[id.index()].clone()),
            number: numbers[id.index()],
            lives: i32::try_from(options.starting_lives).unwrap_or(i32::MAX),
            is_killer: options.start_as_killer,
            hits_on_own_number: if options.start_as_killer {
                hits_to_killer
            } else {
                0
            },
        });

        Self {
            turn: TurnState::new(players.player_count()),
            players,
            starting_lives: options.starting_lives,
            hits_to_killer,
            announcement: Announcement::default(),
        }
    }

    /// Get a player's record.
    pub fn player(&self, id: PlayerId) -> &KillerPlayer {
        &self.players[id]
    }

    pub fn players(&self) -> &PlayerMap<KillerPlayer> {
        &self.players
    }

    pub fn hits_to_killer(&self) -> u32 {
        self.hits_to_killer
    }

    /// Players still in the game.
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| !p.player.eliminated)
            .map(|(id, _)| id)
            .collect()
    }

    /// Non-eliminated opponent holding `number`.
    fn find_target(&self, shooter: PlayerId, number: u8) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(id, p)| *id != shooter && !p.player.eliminated && p.number == number)
            .map(|(id, _)| id)
    }

    fn hit_own_number(&mut self, id: PlayerId, multiplier: u32) {
        let hits_to_killer = self.hits_to_killer;
        let record = &mut self.players[id];
        let name = record.player.name.clone();

        if !record.is_killer {
            record.hits_on_own_number = (record.hits_on_own_number + multiplier).min(hits_to_killer);
            if record.hits_on_own_number >= hits_to_killer {
                record.is_killer = true;
                info!(player = %name, "became a killer");
                self.announcement
                    .set_event(format!("{name} is now a KILLER!"));
            } else {
                let remaining = hits_to_killer - record.hits_on_own_number;
                self.announcement.set_event(format!(
                    "{name} hit their number! {remaining} more to become killer"
                ));
            }
            return;
        }

        record.lives -= multiplier as i32;
        if record.lives <= 0 {
            record.player.eliminated = true;
            self.announcement
                .set_event(format!("{name} hit their own number and is eliminated!"));
        } else {
            let lives = record.lives;
            self.announcement.set_event(format!(
                "{name} hit their own number! {lives} life/lives left"
            ));
        }
        self.check_winner();
    }

    fn damage(&mut self, shooter: PlayerId, target: PlayerId, multiplier: u32) {
        let shooter_name = self.players[shooter].player.name.clone();
        let record = &mut self.players[target];
        record.lives -= multiplier as i32;

        self.announcement
            .set_event(format!("{shooter_name} hit {}! ", record.player.name));
        if record.lives <= 0 {
            record.player.eliminated = true;
            info!(shooter = %shooter_name, target = %record.player.name, "player eliminated");
            self.announcement
                .push_event(&format!("{} is eliminated!", record.player.name));
        } else {
            self.announcement.push_event(&format!(
                "{} has {} life/lives left",
                record.player.name, record.lives
            ));
        }
    }
}

impl GameVariant for KillerGame {
    fn kind(&self) -> VariantKind {
        VariantKind::Killer
    }

    fn start(&mut self) {
        let name = self.player_name(self.turn.current).to_string();
        self.announcement = Announcement::new("Killer - In Progress", format!("{name}'s turn"));
    }

    fn process_throw(&mut self, segment: &Segment) {
        if self.turn.game_over {
            return;
        }

        let current = self.turn.current;
        let record = &self.players[current];
        debug!(
            player = %record.player.name,
            number = segment.number,
            multiplier = segment.multiplier,
            "killer dart"
        );

        if record.player.eliminated {
            let name = record.player.name.clone();
            self.announcement
                .set_event(format!("{name} is out - waiting for the next player"));
            return;
        }

        let multiplier = u32::from(segment.multiplier);
        if !segment.is_miss() && segment.number == record.number {
            self.hit_own_number(current, multiplier);
            return;
        }

        if record.is_killer && !segment.is_miss() {
            if let Some(target) = self.find_target(current, segment.number) {
                self.damage(current, target, multiplier);
                self.check_winner();
                return;
            }
        }

        let record = &self.players[current];
        let event = if record.is_killer {
            format!("{} missed", record.player.name)
        } else {
            format!("{} needs to hit {}", record.player.name, record.number)
        };
        self.announcement.set_event(event);
    }

    fn next_player(&mut self) {
        if self.turn.game_over {
            return;
        }

        let players = &self.players;
        if !self
            .turn
            .advance_to_eligible(|id| !players[id].player.eliminated)
        {
            self.turn.finish(None);
            self.announcement = Announcement::new("Game Over", "No players left");
            return;
        }

        let name = self.player_name(self.turn.current).to_string();
        self.announcement.set_event(format!("{name}'s turn"));
    }

    fn check_winner(&mut self) -> Option<GameResult> {
        if self.turn.game_over {
            return self.result();
        }

        match self.alive_players().as_slice() {
            [winner] => {
                let winner = *winner;
                self.turn.finish(Some(winner));
                let name = self.player_name(winner).to_string();
                info!(winner = %name, "killer game won");
                self.announcement =
                    Announcement::new("Game Over", format!("{name} is the Killer champion!"));
                Some(GameResult::Winner(winner))
            }
            [] => {
                self.turn.finish(None);
                self.announcement = Announcement::new("Game Over", "No players left");
                Some(GameResult::NoWinner)
            }
            _ => None,
        }
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
            .map(|(id, p)| KillerRow {
                id,
                name: p.player.name.clone(),
                number: p.number,
                lives: p.lives,
                max_lives: self.starting_lives,
                is_killer: p.is_killer,
                hits_on_own_number: p.hits_on_own_number,
                hits_to_killer: self.hits_to_killer,
                eliminated: p.player.eliminated,
                active: id == self.turn.current,
            })
            .collect();
        RenderModel::Killer(KillerBoard { rows })
    }

    fn winner_banner(&self) -> Option<WinnerBanner> {
        let winner = self.turn.winner?;
        Some(WinnerBanner {
            name: self.player_name(winner).to_string(),
            detail: vec!["Congratulations!".to_string()],
        })
    }

    fn player_name(&self, player: PlayerId) -> &str {
        &self.players[player].player.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i}")).collect()
    }

    fn game(n: usize, options: GameOptions) -> KillerGame {
        let mut game = KillerGame::new(&names(n), &options, &mut GameRng::new(42));
        game.start();
        game
    }

    fn own(game: &KillerGame, id: u8) -> u8 {
        game.player(PlayerId::new(id)).number
    }

    #[test]
    fn test_numbers_are_distinct_board_numbers() {
        let game = game(8, GameOptions::default());
        let mut numbers: Vec<u8> = game.players().values().map(|p| p.number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 8);
        assert!(numbers.iter().all(|n| (1..=20).contains(n)));
    }

    #[test]
    fn test_start_announces_first_player() {
        let game = game(2, GameOptions::default());
        assert_eq!(game.announcement().status, "Killer - In Progress");
        assert_eq!(game.announcement().event, "P1's turn");
    }

    #[test]
    fn test_becomes_killer_after_required_hits() {
        let mut game = game(2, GameOptions::default().with_hits_to_killer(3));
        let number = own(&game, 0);

        game.process_throw(&Segment::single(number));
        assert!(!game.player(PlayerId::new(0)).is_killer);
        assert_eq!(game.announcement().event, "P1 hit their number! 2 more to become killer");

        game.process_throw(&Segment::double(number));
        let p1 = game.player(PlayerId::new(0));
        assert!(p1.is_killer);
        assert_eq!(p1.hits_on_own_number, 3);
    }

    #[test]
    fn test_treble_saturates_hits() {
        let mut game = game(2, GameOptions::default().with_hits_to_killer(2));
        let number = own(&game, 0);

        game.process_throw(&Segment::treble(number));
        let p1 = game.player(PlayerId::new(0));
        assert!(p1.is_killer);
        assert_eq!(p1.hits_on_own_number, 2);
    }

    #[test]
    fn test_non_killer_cannot_damage() {
        let mut game = game(2, GameOptions::default());
        let target = own(&game, 1);

        game.process_throw(&Segment::single(target));
        assert_eq!(game.player(PlayerId::new(1)).lives, 3);
        assert_eq!(
            game.announcement().event,
            format!("P1 needs to hit {}", own(&game, 0))
        );
    }

    #[test]
    fn test_killer_self_damage_eliminates() {
        let options = GameOptions::default()
            .with_starting_lives(2)
            .with_start_as_killer(true);
        let mut game = game(3, options);
        let number = own(&game, 0);

        game.process_throw(&Segment::double(number));
        assert!(game.player(PlayerId::new(0)).player.eliminated);
        assert!(!game.is_over());

        // Further darts this turn are ignored.
        let target = own(&game, 1);
        game.process_throw(&Segment::treble(target));
        assert_eq!(game.player(PlayerId::new(1)).lives, 2);

        game.next_player();
        assert_eq!(game.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_self_elimination_hands_win_to_last_player() {
        let options = GameOptions::default()
            .with_starting_lives(1)
            .with_start_as_killer(true);
        let mut game = game(2, options);
        let number = own(&game, 0);

        game.process_throw(&Segment::single(number));
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_next_player_skips_eliminated() {
        let options = GameOptions::default()
            .with_starting_lives(1)
            .with_start_as_killer(true);
        let mut game = game(3, options);
        let target = own(&game, 1);

        game.process_throw(&Segment::single(target));
        assert!(game.player(PlayerId::new(1)).player.eliminated);

        game.next_player();
        assert_eq!(game.current_player(), PlayerId::new(2));
        assert_eq!(game.announcement().event, "P3's turn");

        game.next_player();
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_miss_is_noop() {
        let mut game = game(2, GameOptions::default().with_start_as_killer(true));
        let before = game.players().clone();

        game.process_throw(&Segment::miss());
        assert_eq!(game.players(), &before);
        assert_eq!(game.announcement().event, "P1 missed");
    }

    #[test]
    fn test_render_rows() {
        let game = game(2, GameOptions::default().with_starting_lives(4));
        let RenderModel::Killer(board) = game.render() else {
            panic!("expected killer board");
        };
        assert_eq!(board.rows.len(), 2);
        assert!(board.rows[0].active);
        assert!(!board.rows[1].active);
        assert_eq!(board.rows[1].max_lives, 4);
        assert_eq!(board.rows[1].lives, 4);
    }

    #[test]
    fn test_huge_starting_lives_saturate() {
        let game = game(2, GameOptions::default().with_starting_lives(u32::MAX));
        assert!(game.players().values().all(|p| p.lives == i32::MAX));
    }
}
