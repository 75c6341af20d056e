//! Board module - the grid store
//!
//! A `width x height` grid where each cell is empty, part of the falling
//! piece, or locked. Uses flat row-major storage for cache locality.
//! Coordinates: (x, y) with x growing left to right and y growing top to bottom.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// The game grid, row-major (`y * width + x`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the standard 10x20 size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given size
    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (x, y), `None` when out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false (and writes nothing) when out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True when (x, y) is on the board and holds a locked block
    pub fn is_locked(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Cell::Locked))
    }

    /// One row as a slice; empty for rows off the board
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height as usize {
            return &[];
        }
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// A row is full only when every cell is locked; falling cells never count
    pub fn is_row_full(&self, y: usize) -> bool {
        let row = self.row(y);
        !row.is_empty() && row.iter().all(|c| c.is_locked())
    }

    /// Remove every full row in a single pass.
    ///
    /// Remaining rows keep their relative order and drop down; the same
    /// number of empty rows appear at the top. Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        // Two pointers, bottom to top: surviving rows are copied down to write_y.
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        cleared
    }

    /// Count of cells in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Build a board from raw rows (0 empty, 1 falling, 2 locked).
    ///
    /// Returns `None` when rows are jagged, dimensions exceed `u8`, or a value
    /// is not a valid cell.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first()?.as_ref().len()).ok()?;
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width as usize {
                return None;
            }
            for &v in row {
                cells.push(Cell::from_u8(v)?);
            }
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Raw rows (0/1/2), the form the renderer contract and tests use
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.as_u8()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_falling_cells_do_not_fill_a_row() {
        let mut board = Board::with_size(3, 2);
        board.set(0, 1, Cell::Locked);
        board.set(1, 1, Cell::Falling);
        board.set(2, 1, Cell::Locked);
        assert!(!board.is_row_full(1));
        assert_eq!(board.clear_full_rows(), 0);
    }

    #[test]
    fn test_clear_adjacent_full_rows() {
        let mut board = Board::from_rows(&[
            [0u8, 2, 0],
            [2, 2, 2],
            [2, 2, 2],
            [2, 0, 2],
        ])
        .unwrap();
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(
            board.to_rows(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 2, 0], vec![2, 0, 2]]
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Board::from_rows(&[vec![0u8, 0], vec![0]]).is_none());
        assert!(Board::from_rows(&[[3u8]]).is_none());
    }
}
