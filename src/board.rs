//! One side of the game: a grid and the fleet placed on it.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{GameError, GuessResult};
use crate::grid::{Cell, Coordinate, Grid};
use crate::ship::{Fleet, Ship, ShipId};

pub struct Board {
    grid: Grid,
    fleet: Fleet,
}

impl Board {
    /// Create an empty `size`×`size` board with the standard fleet, unplaced.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self::with_fleet(Grid::new(size)?, Fleet::standard()))
    }

    pub fn with_fleet(grid: Grid, fleet: Fleet) -> Self {
        Self { grid, fleet }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship, GameError> {
        self.fleet.get(id)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    /// Remove every ship and every guess from the board.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.fleet.reset();
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Grid, &mut Fleet) {
        (&mut self.grid, &mut self.fleet)
    }

    /// Process a guess at `coord`, marking hits/misses and reporting result.
    pub fn guess(&mut self, coord: Coordinate) -> Result<GuessResult, GameError> {
        match self.grid.get(coord)? {
            Cell::Hit | Cell::Miss => Err(GameError::AlreadyGuessed),
            Cell::Empty => {
                self.grid.mark(coord, Cell::Miss)?;
                Ok(GuessResult::Miss)
            }
            Cell::Ship(id) => {
                let ship = self.fleet.get_mut(id)?;
                ship.register_hit();
                let result = if ship.is_sunk() {
                    GuessResult::Sink(ship.name())
                } else {
                    GuessResult::Hit
                };
                self.grid.mark(coord, Cell::Hit)?;
                Ok(result)
            }
        }
    }

    /// Fogged view of this board for the opposing side.
    pub fn target_view(&self) -> TargetView<'_> {
        TargetView { board: self }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ships: {:?}\n}}",
            self.grid.size(),
            self.fleet,
        )
    }
}

/// What the attacker can see of a board: hits, misses and which ships are
/// still afloat.
#[derive(Clone, Copy)]
pub struct TargetView<'a> {
    board: &'a Board,
}

/// Attacker-side knowledge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unknown,
    Hit,
    Miss,
}

impl<'a> TargetView<'a> {
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn mark(&self, coord: Coordinate) -> Mark {
        match self.board.grid.get(coord) {
            Ok(Cell::Hit) => Mark::Hit,
            Ok(Cell::Miss) => Mark::Miss,
            _ => Mark::Unknown,
        }
    }

    pub fn is_guessed(&self, coord: Coordinate) -> bool {
        self.mark(coord) != Mark::Unknown
    }

    /// Coordinates not yet targeted, row-major.
    pub fn unguessed(&self) -> Vec<Coordinate> {
        self.board
            .grid
            .cells()
            .filter(|(_, cell)| !cell.is_guessed())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Lengths of ships not yet sunk. Sinkings are announced, so this is
    /// public knowledge.
    pub fn lengths_remaining(&self) -> Vec<usize> {
        self.board.fleet.lengths_remaining()
    }
}
