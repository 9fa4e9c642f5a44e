//! Pluggable bot move selection.

use super::types::Board;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Chooses the bot's next cell.
///
/// The state machine only ever asks for a cell; everything else (timing,
/// placement, terminal checks) stays in the engine, so alternative
/// strategies can be swapped in without touching it.
pub trait BotStrategy: Send {
    /// Picks an empty cell index, or `None` when no cell is free.
    fn choose(&mut self, board: &Board) -> Option<usize>;

    /// Display name for logs.
    fn name(&self) -> &str;
}

/// Uniform-random choice among empty cells.
///
/// ChaCha8-backed so the same seed reproduces the same game, following the
/// deterministic-RNG approach used for simulation engines.
pub struct UniformRandom {
    rng: ChaCha8Rng,
}

impl UniformRandom {
    /// Creates a strategy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a deterministic strategy from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for UniformRandom {
    fn choose(&mut self, board: &Board) -> Option<usize> {
        let open = board.empty_cells();
        if open.is_empty() {
            return None;
        }
        let pick = open[self.rng.gen_range(0..open.len())];
        debug!(candidates = open.len(), pick, "bot chose cell");
        Some(pick)
    }

    fn name(&self) -> &str {
        "uniform-random"
    }
}

/// Picks the lowest empty index. Deterministic; useful in tests and demos.
pub struct FirstEmpty;

impl BotStrategy for FirstEmpty {
    fn choose(&mut self, board: &Board) -> Option<usize> {
        (0..9).find(|&i| board.is_empty(i))
    }

    fn name(&self) -> &str {
        "first-empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{Cell, Mark};

    #[test]
    fn test_same_seed_same_picks() {
        let mut a = UniformRandom::seeded(42);
        let mut b = UniformRandom::seeded(42);

        let mut board = Board::new();
        for _ in 0..9 {
            let pick_a = a.choose(&board);
            let pick_b = b.choose(&board);
            assert_eq!(pick_a, pick_b);
            board.set(pick_a.unwrap(), Cell::Occupied(Mark::X));
        }
    }

    #[test]
    fn test_only_empty_cells_chosen() {
        let mut strategy = UniformRandom::seeded(7);
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Mark::X));
        board.set(4, Cell::Occupied(Mark::O));
        board.set(8, Cell::Occupied(Mark::X));

        for _ in 0..100 {
            let pick = strategy.choose(&board).unwrap();
            assert!(board.is_empty(pick), "picked occupied cell {pick}");
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new();
        for i in 0..9 {
            board.set(i, Cell::Occupied(Mark::X));
        }
        assert_eq!(UniformRandom::seeded(1).choose(&board), None);
        assert_eq!(FirstEmpty.choose(&board), None);
    }

    #[test]
    fn test_first_empty_picks_lowest() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Mark::X));
        board.set(1, Cell::Occupied(Mark::O));
        assert_eq!(FirstEmpty.choose(&board), Some(2));
    }
}
