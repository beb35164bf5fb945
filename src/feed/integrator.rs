//! Throw-stream integrator.
//!
//! The sensor re-broadcasts the whole leg on every change, so the same
//! snapshot can arrive several times. The integrator turns that stream
//! into discrete game inputs:
//!
//! - a dart has landed (the throw count went up)
//! - the turn should end (darts were pulled after at least one throw)
//!
//! It never touches a game itself. The session applies the observation and
//! owns the delay before the turn advance.

use tracing::trace;

use super::protocol::FeedSnapshot;
use crate::core::Segment;

/// What one snapshot means for the active game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Observation {
    /// Segment of a newly landed dart.
    pub landed: Option<Segment>,
    /// Schedule the delayed end of turn.
    pub schedule_advance: bool,
}

/// Edge detector over the snapshot stream.
#[derive(Clone, Debug, Default)]
pub struct ThrowIntegrator {
    throws_in_current_turn: u32,
    last_throw_count: u32,
    advance_pending: bool,
}

impl ThrowIntegrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Darts applied since the last completed turn.
    pub fn throws_in_current_turn(&self) -> u32 {
        self.throws_in_current_turn
    }

    pub fn last_throw_count(&self) -> u32 {
        self.last_throw_count
    }

    /// Whether an end of turn has been requested and not yet completed.
    pub fn advance_pending(&self) -> bool {
        self.advance_pending
    }

    /// Process one snapshot, in feed order.
    pub fn observe(&mut self, snapshot: &FeedSnapshot) -> Observation {
        let mut observation = Observation::default();

        if snapshot.num_throws > self.last_throw_count {
            if let Some(latest) = snapshot.throws.last() {
                observation.landed = Some(latest.segment.clone());
                self.throws_in_current_turn += 1;
            }
        }
        self.last_throw_count = snapshot.num_throws;

        if snapshot.is_takeout() && self.throws_in_current_turn > 0 && !self.advance_pending {
            self.advance_pending = true;
            observation.schedule_advance = true;
        }

        // New leg at the sensor.
        if snapshot.num_throws == 0 {
            self.last_throw_count = 0;
        }

        trace!(
            num_throws = snapshot.num_throws,
            in_turn = self.throws_in_current_turn,
            landed = observation.landed.is_some(),
            schedule_advance = observation.schedule_advance,
            "snapshot observed"
        );
        observation
    }

    /// The delayed advance ran: start counting a fresh turn.
    pub fn complete_turn(&mut self) {
        self.throws_in_current_turn = 0;
        self.advance_pending = false;
    }

    /// Forget everything, e.g. when a game starts or ends.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ThrowEvent;
    use crate::feed::TAKEOUT_FINISHED;

    fn snapshot(darts: &[Segment], event: &str) -> FeedSnapshot {
        FeedSnapshot {
            throws: darts.iter().cloned().map(ThrowEvent::new).collect(),
            num_throws: darts.len() as u32,
            event: event.to_string(),
            status: String::new(),
        }
    }

    #[test]
    fn test_duplicate_broadcast_counts_once() {
        let mut integrator = ThrowIntegrator::new();
        let a = Segment::single(20);
        let b = Segment::treble(19);

        let landed: Vec<_> = [
            snapshot(&[], ""),
            snapshot(&[a.clone()], ""),
            snapshot(&[a.clone()], ""),
            snapshot(&[a.clone(), b.clone()], ""),
        ]
        .iter()
        .filter_map(|s| integrator.observe(s).landed)
        .collect();

        assert_eq!(landed, vec![a, b]);
        assert_eq!(integrator.throws_in_current_turn(), 2);
    }

    #[test]
    fn test_takeout_schedules_once() {
        let mut integrator = ThrowIntegrator::new();
        integrator.observe(&snapshot(&[Segment::single(1)], ""));

        let first = integrator.observe(&snapshot(&[], TAKEOUT_FINISHED));
        let again = integrator.observe(&snapshot(&[], TAKEOUT_FINISHED));
        assert!(first.schedule_advance);
        assert!(!again.schedule_advance);
        assert!(integrator.advance_pending());

        integrator.complete_turn();
        assert_eq!(integrator.throws_in_current_turn(), 0);
        assert!(!integrator.advance_pending());
    }

    #[test]
    fn test_takeout_without_throws_is_ignored() {
        let mut integrator = ThrowIntegrator::new();
        let observation = integrator.observe(&snapshot(&[], TAKEOUT_FINISHED));
        assert!(!observation.schedule_advance);
    }

    #[test]
    fn test_count_without_throw_list_lands_nothing() {
        let mut integrator = ThrowIntegrator::new();
        let malformed = FeedSnapshot {
            num_throws: 1,
            ..FeedSnapshot::default()
        };
        assert_eq!(integrator.observe(&malformed).landed, None);
        assert_eq!(integrator.last_throw_count(), 1);
        assert_eq!(integrator.throws_in_current_turn(), 0);
    }

    #[test]
    fn test_new_leg_resets_count() {
        let mut integrator = ThrowIntegrator::new();
        integrator.observe(&snapshot(&[Segment::single(3), Segment::single(4)], ""));
        integrator.observe(&snapshot(&[], ""));
        assert_eq!(integrator.last_throw_count(), 0);

        let observation = integrator.observe(&snapshot(&[Segment::single(5)], ""));
        assert_eq!(observation.landed, Some(Segment::single(5)));
    }
}
