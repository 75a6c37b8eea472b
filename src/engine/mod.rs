//! The game-state engine: phases, statistics, and the state machine.

pub mod game;
pub mod state;

pub use game::{GameEngine, COUNTDOWN_TICK_MS, FLIP_BACK_DELAY_MS};
pub use state::{GameState, GameStatistics, Phase};
