//! Win detection.
//!
//! A [`WinRule`] looks at the full cell array and reports the mark that has
//! won, if any. Draw detection is not part of the rule: the grid turns "no
//! winner on a full board" into a draw.

use crate::cells::Cells;
use crate::types::Mark;

/// Pure function from a board to its winner.
pub trait WinRule {
    fn check(&self, cells: &Cells) -> Option<Mark>;
}

impl<F> WinRule for F
where
    F: Fn(&Cells) -> Option<Mark>,
{
    fn check(&self, cells: &Cells) -> Option<Mark> {
        self(cells)
    }
}

/// Row, column, diagonal, anti-diagonal.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// `length` equal marks in a straight line win.
///
/// Tic-tac-toe is `InARow::new(3)`; gomoku-style boards use 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InARow {
    length: u16,
}

impl InARow {
    /// Lengths below 1 are raised to 1.
    pub fn new(length: u16) -> Self {
        Self {
            length: length.max(1),
        }
    }

    pub fn tic_tac_toe() -> Self {
        Self::new(3)
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    /// Length of the run of `mark` starting at `(row, col)` along `(dr, dc)`.
    fn run(cells: &Cells, mark: Mark, row: i32, col: i32, dr: i32, dc: i32) -> u16 {
        let mut n = 0u16;
        let (mut r, mut c) = (row, col);
        while cells.get_at(r, c) == Some(Some(mark)) {
            n = n.saturating_add(1);
            r += dr;
            c += dc;
        }
        n
    }
}

impl Default for InARow {
    fn default() -> Self {
        Self::tic_tac_toe()
    }
}

impl WinRule for InARow {
    /// First winning line in row-major order of its starting cell.
    fn check(&self, cells: &Cells) -> Option<Mark> {
        for (pos, cell) in cells.iter() {
            let Some(mark) = cell else {
                continue;
            };
            let (row, col) = (pos.row as i32, pos.col as i32);
            for (dr, dc) in DIRECTIONS {
                // Only count from the start of a run.
                if cells.get_at(row - dr, col - dc) == Some(Some(mark)) {
                    continue;
                }
                if Self::run(cells, mark, row, col, dr, dc) >= self.length {
                    return Some(mark);
                }
            }
        }
        None
    }
}
