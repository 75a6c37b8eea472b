//! The game engine: a state machine over [`GameState`].
//!
//! ## Event model
//!
//! Single-threaded and cooperative. All mutations happen inside four
//! operations - `initialize`, `flip_card`, `reset`, `tick` - each atomic
//! with respect to the state it reads. Deferred work (the preview
//! countdown and the mismatch flip-back) is held as explicit deadline
//! fields on the engine, cancelled by `initialize`/`reset` and fired from
//! `tick`, which always re-reads current state. Hosts call `tick` at least
//! every [`POLL_INTERVAL_MS`](crate::core::POLL_INTERVAL_MS) milliseconds.
//!
//! Out-of-phase input (flips during preview, on resolved cards, beyond two
//! face-up) is absorbed as a silent no-op: those are expected consequences
//! of user timing, not errors.

use tracing::{debug, trace};

use crate::cards::{deck, CardDefinition};
use crate::core::{Clock, GameRng, GameTimer, SystemClock};

use super::state::{GameState, GameStatistics, Phase};

/// How long a mismatched pair stays face-up before flipping back.
pub const FLIP_BACK_DELAY_MS: u64 = 1000;

/// Interval between preview countdown decrements.
pub const COUNTDOWN_TICK_MS: u64 = 1000;

const PREVIEW_SECS_PER_CARD: f64 = 0.5;
const PREVIEW_MIN_SECS: f64 = 3.0;
const PREVIEW_MAX_SECS: f64 = 8.0;

/// Preview duration in whole seconds for a deck of `pair_count` pairs.
///
/// Fractional durations round up so the displayed countdown covers the
/// full memorization interval.
fn preview_seconds(pair_count: usize) -> u32 {
    (pair_count as f64 * PREVIEW_SECS_PER_CARD)
        .clamp(PREVIEW_MIN_SECS, PREVIEW_MAX_SECS)
        .ceil() as u32
}

/// The memory-game state machine.
///
/// Owns the authoritative [`GameState`]; Presentation reads snapshots via
/// [`state`](GameEngine::state) and forwards clicks as card indices.
///
/// ```
/// use memory_match::content::default_cards;
/// use memory_match::{GameEngine, ManualClock, Phase};
///
/// let clock = ManualClock::new();
/// let mut engine = GameEngine::with_clock(clock.clone(), 42);
///
/// engine.initialize(&default_cards());
/// assert_eq!(engine.state().phase, Phase::Preview { countdown: 3 });
///
/// clock.advance(3_000);
/// engine.tick();
/// assert_eq!(engine.state().phase, Phase::Playing);
/// ```
pub struct GameEngine<C: Clock = SystemClock> {
    state: GameState,
    rng: GameRng,
    clock: C,
    timer: GameTimer,
    /// When the next countdown decrement is due.
    countdown_due_ms: Option<u64>,
    /// When a pending mismatched pair flips back.
    flip_back_due_ms: Option<u64>,
}

impl GameEngine<SystemClock> {
    /// Engine on the system clock with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SystemClock, GameRng::from_entropy())
    }
}

impl Default for GameEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GameEngine<C> {
    /// Engine with an explicit clock and RNG seed, for deterministic play.
    #[must_use]
    pub fn with_clock(clock: C, seed: u64) -> Self {
        Self::with_rng(clock, GameRng::new(seed))
    }

    fn with_rng(clock: C, rng: GameRng) -> Self {
        Self {
            state: GameState::default(),
            rng,
            clock,
            timer: GameTimer::new(),
            countdown_due_ms: None,
            flip_back_due_ms: None,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of pairs on the table.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.state.total_pairs()
    }

    /// Live elapsed active time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.timer.elapsed_ms()
    }

    /// Start a round from the given definitions.
    ///
    /// Requires at least one definition (collaborators enforce the
    /// playable minimum of three before calling); an empty list is a
    /// no-op. Builds a fresh shuffled deck, zeroes statistics, and enters
    /// the preview countdown.
    pub fn initialize(&mut self, definitions: &[CardDefinition]) {
        if definitions.is_empty() {
            return;
        }

        let cards = deck::build(definitions, &mut self.rng);
        self.start_round(cards, definitions.len());
    }

    /// Reshuffle the current definitions into a new round.
    ///
    /// Derives the definition list back out of the deck (deduplicated by
    /// id, first-seen order), rebuilds it, and re-enters preview exactly
    /// as `initialize` does. No-op before the first `initialize`.
    pub fn reset(&mut self) {
        let definitions = self.state.unique_definitions();
        if definitions.is_empty() {
            return;
        }

        let cards = deck::build(&definitions, &mut self.rng);
        self.start_round(cards, definitions.len());
    }

    fn start_round(&mut self, cards: Vec<crate::cards::GameCard>, pair_count: usize) {
        // Cancel anything a previous round left in flight before the new
        // countdown is scheduled.
        self.countdown_due_ms = None;
        self.flip_back_due_ms = None;
        self.timer.reset();

        let countdown = preview_seconds(pair_count);
        self.state = GameState {
            deck: cards,
            face_up: Default::default(),
            stats: GameStatistics::default(),
            phase: Phase::Preview { countdown },
        };
        self.countdown_due_ms = Some(self.clock.now_ms() + COUNTDOWN_TICK_MS);

        debug!(pairs = pair_count, countdown, "round started");
    }

    /// Flip the card at `index`.
    ///
    /// Silent no-op unless the round is in `Playing`, fewer than two cards
    /// are face-up unresolved, the index is in bounds, and the card is
    /// neither flipped nor matched.
    pub fn flip_card(&mut self, index: usize) {
        if !self.state.phase.is_playing() || self.state.face_up.len() >= 2 {
            return;
        }
        let Some(card) = self.state.deck.get(index) else {
            return;
        };
        if card.is_flipped || card.is_matched {
            return;
        }

        self.state.deck[index].is_flipped = true;
        self.state.face_up.push(index);
        trace!(index, "card flipped");

        if self.state.face_up.len() == 2 {
            self.resolve_pair();
        }
    }

    /// Compare the two face-up cards: one pair-attempt.
    fn resolve_pair(&mut self) {
        self.state.stats.steps += 1;

        let first = &self.state.deck[self.state.face_up[0]];
        let second = &self.state.deck[self.state.face_up[1]];

        // A name card only matches the image card of the same definition,
        // never another name card.
        let is_match = first.id == second.id && first.variant != second.variant;

        if is_match {
            let id = first.id.clone();
            for card in &mut self.state.deck {
                if card.id == id {
                    card.is_matched = true;
                }
            }
            self.state.face_up.clear();
            self.state.stats.matches += 1;

            let now = self.clock.now_ms();
            self.timer.update(true, false, now);
            self.state.stats.elapsed_ms = self.timer.elapsed_ms();
            debug!(id = %id, matches = self.state.stats.matches, "pair matched");

            if self.state.all_matched() {
                self.state.phase = Phase::Completed;
                self.state.stats.completed_at = Some(now);
                self.timer.update(true, true, now);
                debug!(
                    steps = self.state.stats.steps,
                    elapsed_ms = self.state.stats.elapsed_ms,
                    "game completed"
                );
            }
        } else {
            // Leave both visible for the player to study; tick() flips
            // them back once the delay passes. Further flips are rejected
            // meanwhile because the selection still holds two cards.
            self.flip_back_due_ms = Some(self.clock.now_ms() + FLIP_BACK_DELAY_MS);
            trace!("no match, flip back scheduled");
        }
    }

    /// Advance due deferred actions against the clock.
    ///
    /// Runs the preview countdown, fires a due mismatch flip-back, and
    /// samples the timer. Idempotent when nothing is due.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();

        self.run_countdown(now);
        self.run_flip_back(now);

        let started = self.state.stats.started_at.is_some();
        let completed = self.state.phase.is_completed();
        self.timer.update(started, completed, now);
        if self.state.phase.is_playing() {
            self.state.stats.elapsed_ms = self.timer.elapsed_ms();
        }
    }

    fn run_countdown(&mut self, now_ms: u64) {
        // Loop to catch up if more than one second elapsed between ticks.
        while let (Phase::Preview { countdown }, Some(due)) =
            (self.state.phase, self.countdown_due_ms)
        {
            if now_ms < due {
                break;
            }
            if countdown <= 1 {
                self.countdown_due_ms = None;
                self.state.phase = Phase::Playing;
                self.state.stats.started_at = Some(now_ms);
                debug!("preview over, playing");
            } else {
                self.state.phase = Phase::Preview {
                    countdown: countdown - 1,
                };
                self.countdown_due_ms = Some(due + COUNTDOWN_TICK_MS);
            }
        }
    }

    fn run_flip_back(&mut self, now_ms: u64) {
        let Some(due) = self.flip_back_due_ms else {
            return;
        };
        if now_ms < due {
            return;
        }

        self.flip_back_due_ms = None;
        let selection = std::mem::take(&mut self.state.face_up);
        for index in selection {
            if let Some(card) = self.state.deck.get_mut(index) {
                card.is_flipped = false;
            }
        }
        trace!("mismatched pair flipped back");
    }
}
