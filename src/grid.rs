//! Square grid of cell states with bounds-checked access.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::{row_label, MAX_GRID_SIZE};
use crate::ship::ShipId;

/// Zero-based grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Formats as row letter plus 1-based column, e.g. `A5`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match row_label(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship(ShipId),
    Hit,
    Miss,
}

impl Cell {
    /// A cell that has already been targeted.
    pub fn is_guessed(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size`×`size` grid of empty cells.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GameError::InvalidGridSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coordinate) -> Result<usize, GameError> {
        if self.contains(coord) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }

    pub fn get(&self, coord: Coordinate) -> Result<Cell, GameError> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrite the state of one cell.
    pub fn mark(&mut self, coord: Coordinate, state: Cell) -> Result<(), GameError> {
        let i = self.index(coord)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size * size).map(move |i| Coordinate::new(i / size, i % size))
    }

    /// Cells of one row, left to right. `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        self.cells.get(start..start + self.size)
    }

    /// Every `(coordinate, cell)` pair in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.coordinates().zip(self.cells.iter().copied())
    }
}
