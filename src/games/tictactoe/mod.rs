//! Tic-tac-toe with an asynchronous bot opponent.

mod engine;
mod rules;
mod strategy;
mod types;

pub use engine::{EngineConfig, GameEngine};
pub use rules::LINES;
pub use strategy::{BotStrategy, FirstEmpty, UniformRandom};
pub use types::{Board, Cell, GameState, Mark, Outcome, Phase};
