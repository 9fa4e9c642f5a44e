//! Win and draw detection.

use super::types::{Board, Cell, Mark, Outcome};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

impl Board {
    /// Returns the mark holding a complete line, if any.
    ///
    /// Moves alternate and this is evaluated after every single placement,
    /// so at most one side can have a winning line.
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            if let Some(Cell::Occupied(mark)) = self.get(a) {
                if self.get(b) == Some(Cell::Occupied(mark))
                    && self.get(c) == Some(Cell::Occupied(mark))
                {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Classifies the board after a placement: won, drawn, or still going.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.winner() {
            Some(Outcome::Won(mark))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}
