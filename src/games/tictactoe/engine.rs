//! The game engine and its bot-turn scheduler.
//!
//! The engine owns one [`GameState`] value, replaced wholesale on every
//! accepted transition. Callers drive it through `select_side`,
//! `select_cell`, `replay`, and `dispose`; bot moves and the result reveal
//! arrive later from scheduled tokio tasks. At most one timer task is
//! outstanding at any instant, and a reset cancels it both by aborting the
//! handle and by bumping a generation counter that the callback re-checks
//! under the state lock, so a callback that raced past its sleep can never
//! land on a board the player has already reset.

use super::strategy::{BotStrategy, UniformRandom};
use super::types::{Cell, GameState, Mark, Outcome, Phase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Timing knobs for the bot scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Lower bound of the bot "thinking" delay.
    pub bot_delay_min: Duration,
    /// Upper bound (exclusive) of the bot "thinking" delay.
    pub bot_delay_max: Duration,
    /// Pause between a terminal placement and the result panel. This is
    /// presentation timing, not a game rule.
    pub reveal_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bot_delay_min: Duration::from_millis(200),
            bot_delay_max: Duration::from_millis(1200),
            reveal_delay: Duration::from_millis(700),
        }
    }
}

/// What a scheduled timer does when it fires.
#[derive(Debug, Clone, Copy)]
enum TimerKind {
    BotMove,
    RevealResult,
}

struct Inner {
    state: GameState,
    config: EngineConfig,
    strategy: Box<dyn BotStrategy>,
    rng: ChaCha8Rng,
    /// Bumped on every reset; a timer callback from an older generation
    /// must not touch the state.
    generation: u64,
    pending: Option<JoinHandle<()>>,
    updates: watch::Sender<GameState>,
}

impl Inner {
    /// Samples a bot thinking delay from `[bot_delay_min, bot_delay_max)`.
    fn think_delay(&mut self) -> Duration {
        let min = self.config.bot_delay_min;
        let max = self.config.bot_delay_max;
        if max <= min {
            return min;
        }
        let span = (max - min).as_millis() as u64;
        min + Duration::from_millis(self.rng.gen_range(0..span))
    }

    /// Publishes the current state on the watch channel and returns it.
    fn publish(&self) -> GameState {
        let snapshot = self.state.clone();
        self.updates.send_replace(snapshot.clone());
        snapshot
    }

    /// Registers a single delayed callback, superseding any prior one.
    fn schedule(
        inner: &mut Inner,
        shared: &Arc<Mutex<Inner>>,
        delay: Duration,
        kind: TimerKind,
    ) {
        if let Some(prev) = inner.pending.take() {
            prev.abort();
        }
        let generation = inner.generation;
        let shared = Arc::clone(shared);
        debug!(?kind, ?delay, generation, "scheduling timer");
        inner.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut inner = shared.lock().unwrap();
            if inner.generation != generation {
                debug!(?kind, generation, "timer superseded, dropping");
                return;
            }
            match kind {
                TimerKind::BotMove => Inner::fire_bot_move(&mut inner, &shared),
                TimerKind::RevealResult => {
                    inner.state.phase = Phase::Finished;
                    info!(winner = ?inner.state.winner, "result revealed");
                }
            }
            inner.publish();
        }));
    }

    /// Executes the scheduled bot move against the current board.
    fn fire_bot_move(inner: &mut Inner, shared: &Arc<Mutex<Inner>>) {
        let bot = inner.state.human_mark.opponent();
        let Some(index) = inner.strategy.choose(&inner.state.board) else {
            inner.state.bot_pending = false;
            return;
        };
        inner.state.board.set(index, Cell::Occupied(bot));
        info!(index, mark = %bot, "bot move");

        // Turn returns (or, on a terminal board, stays frozen on the human
        // mark for display consistency) either way.
        inner.state.current_turn = inner.state.human_mark;
        inner.state.bot_pending = false;

        if let Some(outcome) = inner.state.board.outcome() {
            Inner::settle(inner, shared, outcome);
        }
    }

    /// Records the terminal result and schedules the reveal timer. The
    /// phase stays `Playing` until that timer fires so the final mark is
    /// visible before the result panel appears.
    fn settle(inner: &mut Inner, shared: &Arc<Mutex<Inner>>, outcome: Outcome) {
        info!(?outcome, "game reached terminal state");
        inner.state.winner = Some(outcome);
        inner.state.bot_pending = false;
        let delay = inner.config.reveal_delay;
        Inner::schedule(inner, shared, delay, TimerKind::RevealResult);
    }
}

/// Tic-tac-toe engine with an asynchronous bot opponent.
///
/// Every operation is total: invalid input is a silent no-op that returns
/// the unchanged snapshot. Requires a tokio runtime for the delayed bot
/// and reveal callbacks.
pub struct GameEngine {
    inner: Arc<Mutex<Inner>>,
}

impl GameEngine {
    /// Creates an engine with production timing and a uniform-random bot.
    pub fn new() -> Self {
        Self::with_strategy(EngineConfig::default(), Box::new(UniformRandom::new()))
    }

    /// Creates an engine with the given timing and a uniform-random bot.
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_strategy(config, Box::new(UniformRandom::new()))
    }

    /// Creates an engine with the given timing and bot strategy.
    pub fn with_strategy(config: EngineConfig, strategy: Box<dyn BotStrategy>) -> Self {
        let state = GameState::new();
        let (updates, _) = watch::channel(state.clone());
        info!(strategy = strategy.name(), "creating game engine");
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state,
                config,
                strategy,
                rng: ChaCha8Rng::from_entropy(),
                generation: 0,
                pending: None,
                updates,
            })),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Observes every accepted transition, including timer-driven ones.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.inner.lock().unwrap().updates.subscribe()
    }

    /// Commits the human to a side and starts play. X always opens, so
    /// choosing O schedules an immediate bot move after a thinking delay.
    /// No-op outside the `Selecting` phase.
    #[instrument(skip(self))]
    pub fn select_side(&self, mark: Mark) -> GameState {
        let mut inner = self.inner.lock().unwrap();
        if inner.state.phase != Phase::Selecting {
            debug!(phase = %inner.state.phase, "side selection ignored outside Selecting");
            return inner.state.clone();
        }
        info!(%mark, "side selected");
        inner.state = GameState::opening(mark);
        if mark == Mark::O {
            inner.state.bot_pending = true;
            let delay = inner.think_delay();
            Inner::schedule(&mut inner, &self.inner, delay, TimerKind::BotMove);
        }
        inner.publish()
    }

    /// Plays the human mark at the given cell. Rejected (unchanged
    /// snapshot) unless the game is in play, the cell is free, no result
    /// is set, and no bot move is pending.
    #[instrument(skip(self))]
    pub fn select_cell(&self, index: usize) -> GameState {
        let mut inner = self.inner.lock().unwrap();
        let rejected = inner.state.phase != Phase::Playing
            || inner.state.winner.is_some()
            || inner.state.bot_pending
            || index >= 9
            || !inner.state.board.is_empty(index);
        if rejected {
            debug!(
                index,
                phase = %inner.state.phase,
                pending = inner.state.bot_pending,
                "cell selection rejected"
            );
            return inner.state.clone();
        }

        let human = inner.state.human_mark;
        inner.state.board.set(index, Cell::Occupied(human));
        info!(index, mark = %human, "human move");

        if let Some(outcome) = inner.state.board.outcome() {
            Inner::settle(&mut inner, &self.inner, outcome);
        } else {
            inner.state.current_turn = human.opponent();
            inner.state.bot_pending = true;
            let delay = inner.think_delay();
            Inner::schedule(&mut inner, &self.inner, delay, TimerKind::BotMove);
        }
        inner.publish()
    }

    /// Discards the game and returns to side selection, cancelling any
    /// outstanding timer.
    #[instrument(skip(self))]
    pub fn replay(&self) -> GameState {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        if let Some(pending) = inner.pending.take() {
            pending.abort();
            debug!("pending timer cancelled on reset");
        }
        info!("game reset");
        inner.state = GameState::new();
        inner.publish()
    }

    /// Teardown hook: cancels any outstanding timer without touching the
    /// state. Invoked automatically on drop.
    #[instrument(skip(self))]
    pub fn dispose(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        if let Some(pending) = inner.pending.take() {
            pending.abort();
            debug!("pending timer cancelled on dispose");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GameEngine {
    fn drop(&mut self) {
        // Lock may be poisoned during a panic unwind; leaking the timer
        // there is acceptable.
        if let Ok(mut inner) = self.inner.lock() {
            inner.generation += 1;
            if let Some(pending) = inner.pending.take() {
                pending.abort();
            }
        }
    }
}
