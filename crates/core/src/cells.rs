//! Cells module - the board's cell array
//!
//! A `rows x columns` grid where each cell is empty or holds a [`Mark`].
//! Uses a flat vector in row-major order (`row * columns + col`) with
//! bounds-checked accessors.

use crate::types::{ArrayPos, Cell, Mark};

/// Cell storage for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cells {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Cells {
    /// Create an empty `columns x rows` array.
    pub fn new(columns: u16, rows: u16) -> Self {
        let len = (columns as usize) * (rows as usize);
        Self {
            columns,
            rows,
            cells: vec![None; len],
        }
    }

    /// Build from rows of integer cell values (`-1`, `0`, `1`).
    ///
    /// Returns `None` if the rows are ragged, empty, or contain another value.
    ///
    /// ```
    /// use tui_tictactoe_core::Cells;
    /// use tui_tictactoe_types::{ArrayPos, Mark};
    ///
    /// let cells = Cells::from_values(&[&[1, 0], &[0, -1]]).unwrap();
    /// assert_eq!(cells.get(ArrayPos::new(0, 0)), Some(Some(Mark::Cross)));
    /// assert_eq!(cells.get(ArrayPos::new(1, 1)), Some(Some(Mark::Circle)));
    /// assert_eq!(cells.filled(), 2);
    /// ```
    pub fn from_values(rows: &[&[i8]]) -> Option<Self> {
        let columns = rows.first()?.len();
        if columns == 0 || rows.iter().any(|r| r.len() != columns) {
            return None;
        }
        let columns = u16::try_from(columns).ok()?;
        let row_count = u16::try_from(rows.len()).ok()?;

        let mut cells = Vec::with_capacity(rows.len() * columns as usize);
        for row in rows {
            for &v in row.iter() {
                cells.push(Mark::from_value(v)?);
            }
        }
        Some(Self {
            columns,
            rows: row_count,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, pos: ArrayPos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.columns {
            return None;
        }
        Some((pos.row as usize) * (self.columns as usize) + (pos.col as usize))
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get cell at `pos`.
    /// Returns None if out of bounds
    pub fn get(&self, pos: ArrayPos) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Get cell at signed `(row, col)`; negative or too-large indices are `None`.
    pub fn get_at(&self, row: i32, col: i32) -> Option<Cell> {
        let row = u16::try_from(row).ok()?;
        let col = u16::try_from(col).ok()?;
        self.get(ArrayPos::new(row, col))
    }

    /// Set cell at `pos`.
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: ArrayPos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, pos: ArrayPos) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate all cells with their positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (ArrayPos, Cell)> + '_ {
        let columns = self.columns as usize;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let pos = ArrayPos::new((i / columns) as u16, (i % columns) as u16);
            (pos, cell)
        })
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_index_calculation() {
        let cells = Cells::new(4, 3);
        assert_eq!(cells.index(ArrayPos::new(0, 0)), Some(0));
        assert_eq!(cells.index(ArrayPos::new(0, 3)), Some(3));
        assert_eq!(cells.index(ArrayPos::new(1, 0)), Some(4));
        assert_eq!(cells.index(ArrayPos::new(2, 3)), Some(11));
        assert_eq!(cells.index(ArrayPos::new(3, 0)), None);
        assert_eq!(cells.index(ArrayPos::new(0, 4)), None);
    }

    #[test]
    fn test_signed_access_rejects_negatives() {
        let cells = Cells::new(3, 3);
        assert_eq!(cells.get_at(-1, 0), None);
        assert_eq!(cells.get_at(0, -1), None);
        assert_eq!(cells.get_at(2, 2), Some(None));
        assert_eq!(cells.get_at(3, 0), None);
    }

    #[test]
    fn test_from_values_layout() {
        let rows: [&[i8]; 2] = [&[1, 0, -1], &[0, 0, 1]];
        let cells = Cells::from_values(&rows).unwrap();
        assert_eq!(cells.columns(), 3);
        assert_eq!(cells.rows(), 2);
        assert_eq!(cells.get(ArrayPos::new(0, 0)), Some(Some(Mark::Cross)));
        assert_eq!(cells.get(ArrayPos::new(0, 2)), Some(Some(Mark::Circle)));
        assert_eq!(cells.get(ArrayPos::new(1, 2)), Some(Some(Mark::Cross)));
        assert_eq!(cells.get(ArrayPos::new(2, 0)), None);
        assert_eq!(cells.filled(), 3);
    }

    #[test]
    fn test_from_values_rejects_bad_input() {
        assert!(Cells::from_values(&[]).is_none());
        assert!(Cells::from_values(&[&[]]).is_none());
        assert!(Cells::from_values(&[&[1, 0], &[0]]).is_none());
        assert!(Cells::from_values(&[&[2]]).is_none());
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut cells = Cells::new(2, 2);
        cells.set(ArrayPos::new(1, 0), Some(Mark::Circle));
        let filled: Vec<_> = cells.iter().filter(|(_, c)| c.is_some()).collect();
        assert_eq!(filled, vec![(ArrayPos::new(1, 0), Some(Mark::Circle))]);
        assert_eq!(cells.iter().count(), 4);
    }

    #[test]
    fn test_clear() {
        let mut cells = Cells::new(2, 2);
        assert!(cells.set(ArrayPos::new(0, 1), Some(Mark::Cross)));
        assert!(!cells.set(ArrayPos::new(2, 1), Some(Mark::Cross)));
        assert_eq!(cells.filled(), 1);
        cells.clear();
        assert_eq!(cells.filled(), 0);
        assert!(cells.is_vacant(ArrayPos::new(0, 1)));
    }
}
