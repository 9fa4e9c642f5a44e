//! PomoPets mini-game engine.
//!
//! This library implements the tic-tac-toe mini-game of the PomoPets
//! companion app: board state with strict turn alternation, win/draw
//! detection, and an asynchronous, cancellable bot-turn scheduler. The
//! rendering layer (web or mobile) consumes immutable [`GameState`]
//! snapshots and drives the engine through four operations; it never
//! mutates game state in place.
//!
//! # Example
//!
//! ```no_run
//! use pomopets_games::{GameEngine, Mark, Phase};
//!
//! # async fn example() {
//! let engine = GameEngine::new();
//! let state = engine.select_side(Mark::X);
//! assert_eq!(state.phase(), Phase::Playing);
//!
//! // The human plays; the bot answers after a randomized delay.
//! let state = engine.select_cell(4);
//! assert!(state.bot_pending());
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;

pub use games::tictactoe::{
    Board, BotStrategy, Cell, EngineConfig, FirstEmpty, GameEngine, GameState, LINES, Mark,
    Outcome, Phase, UniformRandom,
};
