//! Game state: the aggregate the engine owns and Presentation reads.
//!
//! ## GameState
//!
//! - the shuffled deck of `GameCard`s
//! - the face-up selection (at most two unresolved cards)
//! - round statistics
//! - the current phase
//!
//! Mutated only through the engine's operations; everything here is plain
//! data so Presentation can snapshot it freely.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardDefinition, GameCard};

/// Lifecycle phase of a round.
///
/// `Idle → Preview → Playing → Completed`, with `reset` returning to
/// `Preview` from any started round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round initialized yet.
    #[default]
    Idle,
    /// Memorization interval: every card is rendered face-up and flip
    /// input is ignored. `countdown` is the remaining whole seconds.
    Preview {
        /// Seconds until play begins.
        countdown: u32,
    },
    /// Cards accept flips.
    Playing,
    /// Every pair has been matched.
    Completed,
}

impl Phase {
    /// Is this the memorization interval?
    #[must_use]
    pub fn is_preview(self) -> bool {
        matches!(self, Phase::Preview { .. })
    }

    /// Does the round accept flips?
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Has every pair been matched?
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Phase::Completed)
    }
}

/// Round statistics.
///
/// `steps` counts completed pair-attempts (two cards compared), not single
/// flips. `matches` counts successful pairs only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Completed pair-attempts.
    pub steps: u32,

    /// Successful pairs.
    pub matches: u32,

    /// Epoch-millis when play began (preview over).
    pub started_at: Option<u64>,

    /// Epoch-millis when the last pair was matched.
    pub completed_at: Option<u64>,

    /// Elapsed active play time in milliseconds.
    pub elapsed_ms: u64,
}

impl GameStatistics {
    /// Render the elapsed time as `m:ss` for display.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        let total_secs = self.elapsed_ms / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}

/// The authoritative state of one round.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The shuffled deck. Always `2 * total_pairs` cards once initialized.
    pub deck: Vec<GameCard>,

    /// Indices into `deck` of the unresolved face-up cards (at most two).
    pub face_up: SmallVec<[usize; 2]>,

    /// Round statistics.
    pub stats: GameStatistics,

    /// Current phase.
    pub phase: Phase,
}

impl GameState {
    /// Number of pairs on the table.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.len() / 2
    }

    /// Have all cards been matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.deck.is_empty() && self.deck.iter().all(|c| c.is_matched)
    }

    /// Recover the definitions this deck was built from, deduplicated by
    /// id in first-seen order.
    #[must_use]
    pub fn unique_definitions(&self) -> Vec<CardDefinition> {
        let mut seen = FxHashSet::default();
        let mut definitions = Vec::with_capacity(self.total_pairs());

        for card in &self.deck {
            if seen.insert(card.id.clone()) {
                definitions.push(card.definition());
            }
        }

        definitions
    }
}
