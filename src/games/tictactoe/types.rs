//! Core domain types for the tic-tac-toe mini-game.

use serde::{Deserialize, Serialize};

/// A player mark. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The X mark (moves first).
    X,
    /// The O mark (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Checks whether the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string. Empty cells show
    /// their index so the terminal front-end can prompt by number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => index.to_string(),
                    Cell::Occupied(Mark::X) => "X".to_string(),
                    Cell::Occupied(Mark::O) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level engine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for the human to pick a side.
    Selecting,
    /// Game in progress.
    Playing,
    /// Result revealed; only a reset leaves this phase.
    Finished,
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a line.
    Won(Mark),
    /// Board full with no line won.
    Draw,
}

/// Immutable snapshot of the game.
///
/// The engine replaces this value wholesale on every accepted transition;
/// consumers only ever read clones of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) human_mark: Mark,
    pub(super) current_turn: Mark,
    pub(super) phase: Phase,
    pub(super) winner: Option<Outcome>,
    pub(super) bot_pending: bool,
}

impl GameState {
    /// Fresh state in the side-selection phase.
    pub(super) fn new() -> Self {
        Self {
            board: Board::new(),
            human_mark: Mark::X,
            current_turn: Mark::X,
            phase: Phase::Selecting,
            winner: None,
            bot_pending: false,
        }
    }

    /// State at the start of play, after the human committed to a side.
    pub(super) fn opening(human_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            current_turn: Mark::X,
            phase: Phase::Playing,
            winner: None,
            bot_pending: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark the human committed to at side selection.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// The mark the bot plays.
    pub fn bot_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Which mark moves next.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Current engine phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Terminal result, set as soon as a placement ends the game.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// True while a scheduled bot move has not yet fired; the rendering
    /// layer disables input during this window.
    pub fn bot_pending(&self) -> bool {
        self.bot_pending
    }
}
