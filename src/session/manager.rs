//! The game session: one active game, the feed integration, and the
//! delayed turn advance.
//!
//! ## Lifecycle
//!
//! `create_game` / `start_game` validate the setup, build the variant and
//! bump the session generation. `end_game` drops the game. Both discard
//! any pending turn advance, and the advance also remembers the generation
//! it was scheduled under, so a timer can never reach a different game than
//! the one whose takeout scheduled it.
//!
//! ## Time
//!
//! The session never sleeps. Callers pass `now` into the feed entry points,
//! ask for `next_deadline()`, and call `fire_due(now)` once it has passed.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use super::config::ScoreboardConfig;
use super::error::SetupError;
use super::roster::{normalize_name, Roster, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{Announcement, GameOptions, GameRng, VariantKind};
use crate::feed::{FeedMessage, FeedSnapshot, MotionState, ThrowIntegrator};
use crate::games::build_variant;
use crate::render::{Frame, LegView};
use crate::rules::GameVariant;

/// Status shown before the first game and after `end_game`.
pub const IDLE_STATUS: &str = "Waiting for game...";

/// Status shown between games when the feed reports none.
pub const FEED_IDLE_STATUS: &str = "Waiting...";

struct ActiveGame {
    generation: u64,
    game: Box<dyn GameVariant + Send>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingAdvance {
    generation: u64,
    due: Instant,
}

/// Owns the active game and everything that feeds it.
pub struct GameSession {
    config: ScoreboardConfig,
    rng: GameRng,
    roster: Roster,
    active: Option<ActiveGame>,
    generation: u64,
    integrator: ThrowIntegrator,
    pending: Option<PendingAdvance>,
    idle: Announcement,
    leg: LegView,
    motion: MotionState,
}

impl GameSession {
    pub fn new(config: ScoreboardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "session created");

        Self {
            config,
            rng,
            roster: Roster::new(),
            active: None,
            generation: 0,
            integrator: ThrowIntegrator::new(),
            pending: None,
            idle: Announcement::new(IDLE_STATUS, ""),
            leg: LegView::default(),
            motion: MotionState::default(),
        }
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// The active game, if any.
    pub fn game(&self) -> Option<&dyn GameVariant> {
        self.active.as_ref().map(|active| &*active.game as &dyn GameVariant)
    }

    pub fn is_game_active(&self) -> bool {
        self.active.is_some()
    }

    /// Bumped every time a game is created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn integrator(&self) -> &ThrowIntegrator {
        &self.integrator
    }

    // === Lifecycle ===

    /// Create a game from a setup-screen variant id (`killer`, `cricket`,
    /// `301`, `501`, `snakes`).
    pub fn create_game(
        &mut self,
        variant_id: &str,
        players: &[String],
        options: GameOptions,
    ) -> Result<(), SetupError> {
        let kind = variant_id
            .parse::<VariantKind>()
            .map_err(|_| SetupError::UnknownVariant(variant_id.to_string()))?;
        self.start_game(kind, players, options)
    }

    /// Replace any active game with a fresh one.
    ///
    /// On error nothing changes: the previous game, if any, keeps running.
    #[instrument(skip(self, kind, players, options), fields(kind = %kind, players = players.len()))]
    pub fn start_game(
        &mut self,
        kind: VariantKind,
        players: &[String],
        options: GameOptions,
    ) -> Result<(), SetupError> {
        let names = validate_players(players)?;
        validate_options(kind, &options)?;

        let mut rng = self.rng.fork();
        let mut game = build_variant(kind, &names, &options, &mut rng);
        game.start();

        self.generation += 1;
        self.integrator.reset();
        self.pending = None;
        self.active = Some(ActiveGame {
            generation: self.generation,
            game,
        });

        info!(generation = self.generation, "game started");
        Ok(())
    }

    /// Start a game with the roster's players, in roster order.
    pub fn start_from_roster(
        &mut self,
        kind: VariantKind,
        options: GameOptions,
    ) -> Result<(), SetupError> {
        let names = self.roster.names();
        self.start_game(kind, &names, options)
    }

    /// Drop the active game. Any pending turn advance is discarded.
    #[instrument(skip(self))]
    pub fn end_game(&mut self) {
        if let Some(active) = self.active.take() {
            info!(
                generation = active.generation,
                kind = %active.game.kind(),
                over = active.game.is_over(),
                "game ended"
            );
        }
        self.pending = None;
        self.integrator.reset();
        self.idle = Announcement::new(IDLE_STATUS, "");
    }

    // === Feed ===

    /// Parse and apply one raw feed line. Malformed lines are logged and
    /// dropped.
    pub fn handle_message(&mut self, raw: &str, now: Instant) {
        match FeedMessage::parse(raw) {
            Ok(message) => self.handle_feed(message, now),
            Err(err) => warn!(error = %err, "dropping feed message"),
        }
    }

    pub fn handle_feed(&mut self, message: FeedMessage, now: Instant) {
        match message {
            FeedMessage::State(snapshot) => self.on_snapshot(&snapshot, now),
            FeedMessage::MotionState(motion) => self.motion = motion,
        }
    }

    /// Apply one leg snapshot.
    pub fn on_snapshot(&mut self, snapshot: &FeedSnapshot, now: Instant) {
        self.leg = LegView::from_snapshot(snapshot);

        let Some(active) = self.active.as_mut() else {
            let status = if snapshot.status.is_empty() {
                FEED_IDLE_STATUS
            } else {
                snapshot.status.as_str()
            };
            self.idle = Announcement::new(status, snapshot.event.clone());
            return;
        };

        let observation = self.integrator.observe(snapshot);

        if let Some(segment) = observation.landed {
            debug!(segment = %segment.label(), "dart landed");
            active.game.process_throw(&segment);
        }

        if observation.schedule_advance {
            let due = now + self.config.takeout_delay();
            debug!(generation = active.generation, "turn advance scheduled");
            self.pending = Some(PendingAdvance {
                generation: active.generation,
                due,
            });
        }
    }

    // === Timer ===

    /// When the pending turn advance is due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    /// Run the pending turn advance if its deadline has passed.
    ///
    /// Returns whether the active game changed.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.due > now {
            return false;
        }
        self.pending = None;

        match self.active.as_mut() {
            Some(active) if active.generation == pending.generation => {
                active.game.next_player();
                self.integrator.complete_turn();
                debug!(
                    generation = pending.generation,
                    current = %active.game.current_player(),
                    "turn advanced"
                );
                true
            }
            _ => {
                debug!(generation = pending.generation, "stale turn advance dropped");
                false
            }
        }
    }

    // === View ===

    /// Everything the UI needs right now.
    pub fn frame(&self) -> Frame {
        let (announcement, board, winner) = match &self.active {
            Some(active) => (
                active.game.announcement().clone(),
                Some(active.game.render()),
                active.game.winner_banner(),
            ),
            None => (self.idle.clone(), None, None),
        };

        Frame {
            status: announcement.status,
            event: announcement.event,
            board,
            winner,
            leg: self.leg.clone(),
            motion: self.motion,
        }
    }
}

fn validate_players(players: &[String]) -> Result<Vec<String>, SetupError> {
    if players.len() < MIN_PLAYERS {
        return Err(SetupError::TooFewPlayers(players.len()));
    }
    if players.len() > MAX_PLAYERS {
        return Err(SetupError::TooManyPlayers(players.len()));
    }
    players.iter().map(|name| normalize_name(name)).collect()
}

fn validate_options(kind: VariantKind, options: &GameOptions) -> Result<(), SetupError> {
    let invalid = |option: &'static str, reason: &str| {
        Err(SetupError::InvalidOption {
            option,
            reason: reason.to_string(),
        })
    };

    match kind {
        VariantKind::Killer if options.starting_lives == 0 => {
            invalid("startingLives", "must be at least 1")
        }
        VariantKind::Killer if i32::try_from(options.starting_lives).is_err() => {
            invalid("startingLives", "is too large")
        }
        VariantKind::Killer if options.hits_to_killer == 0 => {
            invalid("hitsToKiller", "must be at least 1")
        }
        VariantKind::X301 | VariantKind::X501 if options.starting_score == Some(0) => {
            invalid("startingScore", "must be at least 1")
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn session() -> GameSession {
        GameSession::new(ScoreboardConfig::default().with_seed(1))
    }

    #[test]
    fn test_idle_frame() {
        let session = session();
        let frame = session.frame();
        assert_eq!(frame.status, IDLE_STATUS);
        assert_eq!(frame.event, "");
        assert!(frame.board.is_none());
    }

    #[test]
    fn test_create_game_rejects_bad_setup() {
        let mut session = session();
        assert_eq!(
            session.create_game("golf", &names(&["A", "B"]), GameOptions::default()),
            Err(SetupError::UnknownVariant("golf".into()))
        );
        assert_eq!(
            session.create_game("killer", &names(&["A"]), GameOptions::default()),
            Err(SetupError::TooFewPlayers(1))
        );
        assert_eq!(
            session.create_game("cricket", &names(&["A", " "]), GameOptions::default()),
            Err(SetupError::EmptyName)
        );
        assert!(matches!(
            session.create_game(
                "killer",
                &names(&["A", "B"]),
                GameOptions::default().with_starting_lives(0)
            ),
            Err(SetupError::InvalidOption { option: "startingLives", .. })
        ));
        assert!(!session.is_game_active());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_starting_lives_must_fit_a_life_total() {
        let mut session = session();
        let err = session
            .create_game(
                "killer",
                &names(&["A", "B"]),
                GameOptions::default().with_starting_lives(u32::MAX),
            )
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::InvalidOption {
                option: "startingLives",
                reason: "is too large".to_string(),
            }
        );

        let lives = i32::MAX as u32;
        session
            .create_game(
                "killer",
                &names(&["A", "B"]),
                GameOptions::default().with_starting_lives(lives),
            )
            .unwrap();
        assert!(session.is_game_active());
    }

    #[test]
    fn test_unused_options_are_ignored() {
        let mut session = session();
        let options = GameOptions::default().with_starting_lives(0);
        session
            .create_game("cricket", &names(&["A", "B"]), options)
            .unwrap();
        assert!(session.is_game_active());
    }

    #[test]
    fn test_end_game_drops_pending_advance() {
        let mut session = session();
        session.create_game("501", &names(&["A", "B"]), GameOptions::default()).unwrap();

        let now = Instant::now();
        session.handle_message(
            r#"{"type":"state","data":{"numThrows":1,"throws":[{"segment":{"number":20,"multiplier":1}}]}}"#,
            now,
        );
        session.handle_message(
            r#"{"type":"state","data":{"numThrows":0,"event":"Takeout finished"}}"#,
            now,
        );
        assert_eq!(session.next_deadline(), Some(now + Duration::from_secs(1)));

        session.end_game();
        assert_eq!(session.next_deadline(), None);
        assert!(!session.fire_due(now + Duration::from_secs(2)));
        assert_eq!(session.frame().status, IDLE_STATUS);
    }
}
