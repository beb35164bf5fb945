//! Sensor feed: wire messages and the throw-stream integrator.

mod integrator;
mod protocol;

pub use integrator::{Observation, ThrowIntegrator};
pub use protocol::{FeedError, FeedMessage, FeedSnapshot, MotionState, TAKEOUT_FINISHED};
