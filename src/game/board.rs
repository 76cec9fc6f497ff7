use std::fmt;

use tracing::trace;

use super::Player;
use crate::error::GameError;

/// Height of the classic board.
pub const DEFAULT_ROWS: usize = 6;
/// Width of the classic board.
pub const DEFAULT_COLS: usize = 7;
/// Largest cell count a board can allocate.
pub const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<Cell>();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player holding this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A `height × width` grid stored row-major.
/// Row 0 is the top, row `height - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Number of cells for a `height × width` board, or `InvalidDimension`
    /// if either side is zero or the grid could not be allocated.
    pub fn cell_count(height: usize, width: usize) -> Result<usize, GameError> {
        height
            .checked_mul(width)
            .filter(|&len| len > 0 && len <= MAX_CELLS)
            .ok_or(GameError::InvalidDimension { height, width })
    }

    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let len = Self::cell_count(height, width)?;

        Ok(Board {
            height,
            width,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position, `None` if outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Lowest empty row in a column
    pub fn landing_row(&self, col: usize) -> Result<usize, GameError> {
        if col >= self.width {
            return Err(GameError::OutOfRange {
                column: col,
                width: self.width,
            });
        }

        let row = (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty())
            .ok_or(GameError::ColumnFull { column: col })?;

        trace!(column = col, row, "landing row");
        Ok(row)
    }

    /// Mark an empty cell as held by `player`.
    ///
    /// The caller is expected to have obtained `row` from [`Board::landing_row`];
    /// panics if the position lies outside the grid.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        assert!(col < self.width, "column {col} outside board");
        let cell = &mut self.cells[row * self.width + col];
        debug_assert!(cell.is_empty(), "cell ({row}, {col}) already occupied");
        *cell = Cell::Occupied(player);
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => !cell.is_empty(),
            None => true,
        }
    }

    /// Columns that can still take a piece, left to right
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell.player() {
                    Some(player) => write!(f, "{}", player.id())?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
