//! Command-line arguments for the terminal front-end.

use clap::Parser;

/// Play the PomoPets tic-tac-toe mini-game in the terminal.
#[derive(Debug, Parser)]
#[command(name = "pomopets_games", version, about)]
pub struct Cli {
    /// Side to play (x opens).
    #[arg(long, value_enum, default_value = "x")]
    pub side: Side,

    /// Seed for the bot's move selection; omit for entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit one JSON snapshot per line instead of the ASCII board.
    #[arg(long)]
    pub json: bool,

    /// Minimum bot thinking delay in milliseconds.
    #[arg(long, default_value_t = 200)]
    pub delay_min: u64,

    /// Maximum bot thinking delay in milliseconds (exclusive).
    #[arg(long, default_value_t = 1200)]
    pub delay_max: u64,

    /// Pause before the result panel, in milliseconds.
    #[arg(long, default_value_t = 700)]
    pub reveal: u64,
}

/// Which mark the human plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Side {
    /// Play as X (you open).
    X,
    /// Play as O (the bot opens).
    O,
}
