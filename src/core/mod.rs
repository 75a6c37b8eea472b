//! Core building blocks: RNG, wall-clock access, round timer.
//!
//! These are the engine's collaborators that touch the outside world
//! (randomness and time), kept behind small deterministic seams.

pub mod clock;
pub mod rng;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use rng::GameRng;
pub use timer::{GameTimer, POLL_INTERVAL_MS};
