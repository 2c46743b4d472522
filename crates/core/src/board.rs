//! Board module - manages the game grid
//!
//! The board is an N x N grid (8x8 by default) of empty or filled cells,
//! stored as a flat row-major vector. Coordinates are `(row, col)` with
//! `(0, 0)` at the top-left.
//!
//! Every operation that changes cells returns a new `Board` instead of
//! mutating in place, so a rejected or half-finished placement is never
//! observable.

use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use serde::Serialize;

use crate::pieces::Shape;
use crate::types::{Cell, BOARD_SIZE, MAX_BOARD_SIZE};

/// Indices of completed lines (at most one per row/column)
pub type LineSet = ArrayVec<usize, MAX_BOARD_SIZE>;

/// Rows and columns that are completely filled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletedLines {
    pub rows: LineSet,
    pub cols: LineSet,
}

impl CompletedLines {
    /// Completed rows plus completed columns
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Failure to build a board from text
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    #[display("board must have between 1 and {MAX_BOARD_SIZE} rows, got {_0}")]
    BadSize(#[error(not(source))] usize),
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[display("unexpected character {ch:?} at row {row}")]
    BadChar { row: usize, ch: char },
}

/// The game board - N columns x N rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimension
    ///
    /// The dimension is clamped to `1..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parse a board from rows of `#` (filled) and `.` (empty).
    ///
    /// Whitespace inside a row is ignored, so `"# # . ."` also works.
    pub fn parse(rows: &[&str]) -> Result<Self, BoardParseError> {
        let size = rows.len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardParseError::BadSize(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let before = cells.len();
            for ch in text.chars().filter(|c| !c.is_whitespace()) {
                match ch {
                    '#' | 'X' | 'x' | '1' => cells.push(Cell::Filled),
                    '.' | '0' => cells.push(Cell::Empty),
                    other => return Err(BoardParseError::BadChar { row, ch: other }),
                }
            }
            let len = cells.len() - before;
            if len != size {
                return Err(BoardParseError::RaggedRow {
                    row,
                    len,
                    expected: size,
                });
            }
        }

        Ok(Self { size, cells })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Board dimension N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Copy of this board with one cell changed; out-of-bounds is ignored
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        let mut next = self.clone();
        if let Some(idx) = next.index(row, col) {
            next.cells[idx] = cell;
        }
        next
    }

    /// Whether `shape` anchored at `(row, col)` lies on the board over empty cells
    pub fn can_place(&self, shape: &Shape, row: usize, col: usize) -> bool {
        shape.filled_cells().all(|(i, j)| {
            let (Some(r), Some(c)) = (row.checked_add(i), col.checked_add(j)) else {
                return false;
            };
            matches!(self.get(r, c), Some(Cell::Empty))
        })
    }

    /// Copy of this board with `shape` stamped at `(row, col)`.
    ///
    /// The caller must have checked [`Board::can_place`]; cells that fall off
    /// the board are skipped.
    pub fn place(&self, shape: &Shape, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        for (i, j) in shape.filled_cells() {
            if let Some(idx) = next.index(row.saturating_add(i), col.saturating_add(j)) {
                next.cells[idx] = Cell::Filled;
            }
        }
        next
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.size {
            return false;
        }
        let start = row * self.size;
        self.cells[start..start + self.size]
            .iter()
            .all(|cell| cell.is_filled())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= self.size {
            return false;
        }
        (0..self.size).all(|row| self.cells[row * self.size + col].is_filled())
    }

    /// Full rows and full columns, both judged against this same board
    pub fn detect_completed_lines(&self) -> CompletedLines {
        let mut lines = CompletedLines::default();
        for i in 0..self.size {
            if self.is_row_full(i) {
                lines.rows.push(i);
            }
            if self.is_col_full(i) {
                lines.cols.push(i);
            }
        }
        lines
    }

    /// Copy of this board with every listed row and column emptied
    pub fn clear_lines(&self, lines: &CompletedLines) -> Self {
        let mut next = self.clone();
        let size = next.size;
        for &row in lines.rows.iter().filter(|&&r| r < size) {
            next.cells[row * size..(row + 1) * size].fill(Cell::Empty);
        }
        for &col in lines.cols.iter().filter(|&&c| c < size) {
            for row in 0..size {
                next.cells[row * size + col] = Cell::Empty;
            }
        }
        next
    }

    /// True iff every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Whether `shape` fits at any of the N*N origins
    pub fn fits_anywhere(&self, shape: &Shape) -> bool {
        (0..self.size).any(|row| (0..self.size).any(|col| self.can_place(shape, row, col)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 7), Some(7));
        assert_eq!(board.index(1, 0), Some(8));
        assert_eq!(board.index(7, 7), Some(63));
        assert_eq!(board.index(8, 0), None);
        assert_eq!(board.index(0, 8), None);
    }

    #[test]
    fn test_board_size_is_clamped() {
        assert_eq!(Board::new(0).size(), 1);
        assert_eq!(Board::new(100).size(), MAX_BOARD_SIZE);
    }

    #[test]
    fn test_parse_roundtrips_cells() {
        let board = Board::parse(&["#..", ".#.", "..#"]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(0, 0), Some(Cell::Filled));
        assert_eq!(board.get(1, 1), Some(Cell::Filled));
        assert_eq!(board.get(0, 1), Some(Cell::Empty));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Board::parse(&[]), Err(BoardParseError::BadSize(0)));
        assert_eq!(
            Board::parse(&["##", "#"]),
            Err(BoardParseError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Board::parse(&["#?", ".."]),
            Err(BoardParseError::BadChar { row: 0, ch: '?' })
        );
    }

    #[test]
    fn test_row_and_column_can_complete_together() {
        // Row 0 and column 0 share cell (0, 0).
        let mut board = Board::new(3);
        for i in 0..3 {
            board = board.with_cell(0, i, Cell::Filled);
            board = board.with_cell(i, 0, Cell::Filled);
        }
        let lines = board.detect_completed_lines();
        assert_eq!(lines.rows.as_slice(), &[0]);
        assert_eq!(lines.cols.as_slice(), &[0]);
        assert_eq!(lines.count(), 2);

        let cleared = board.clear_lines(&lines);
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_rows_iterates_by_row() {
        let board = Board::parse(&["#.", ".."]).unwrap();
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Cell::Filled, Cell::Empty]);
    }
}
