//! # memory-match
//!
//! The game-state core of a browser-style memory-matching game: a player
//! flips paired cards (a name card and an image card sharing an id) until
//! every pair is revealed. Decks come from the built-in set, manual entry,
//! spreadsheet import, or a share link.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: `GameEngine` holds the authoritative
//!    `GameState`; Presentation reads snapshots and forwards clicks as
//!    card indices. Invalid input is absorbed as a silent no-op.
//!
//! 2. **Explicit deferred actions**: the preview countdown and the
//!    mismatch flip-back are deadline fields on the engine, cancelled on
//!    every `initialize`/`reset` and fired from a host-driven `tick` pump
//!    that always re-reads current state. No ambient timers, no stale
//!    callbacks.
//!
//! 3. **Deterministic seams**: randomness (`GameRng`) and wall-clock time
//!    (`Clock`) are injected, so every shuffle and every timing path is
//!    reproducible under test.
//!
//! ## Modules
//!
//! - `core`: RNG, clock trait, round timer
//! - `cards`: card definitions and the doubled-deck builder
//! - `engine`: the game state machine (preview/playing/completed)
//! - `codec`: shareable URL token codec
//! - `content`: built-in card set and ingestion validation

pub mod cards;
pub mod codec;
pub mod content;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::cards::{CardDefinition, CardId, CardImage, CardVariant, GameCard};
pub use crate::codec::DecodeError;
pub use crate::content::{ContentError, MIN_CARD_COUNT};
pub use crate::core::{Clock, GameRng, GameTimer, ManualClock, SystemClock, POLL_INTERVAL_MS};
pub use crate::engine::{
    GameEngine, GameState, GameStatistics, Phase, COUNTDOWN_TICK_MS, FLIP_BACK_DELAY_MS,
};
