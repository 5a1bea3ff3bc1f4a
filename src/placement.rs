//! Ship placement: validation, manual commits and random layouts.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{MAX_FLEET_ATTEMPTS, MAX_RANDOM_ATTEMPTS};
use crate::grid::{Cell, Coordinate, Grid};
use crate::ship::{Orientation, ShipId};

/// Cells a ship of `length` would occupy from `start`, provided they are all
/// inside the grid and empty. Never mutates.
pub fn check_placement(
    grid: &Grid,
    length: usize,
    start: Coordinate,
    orientation: Orientation,
) -> Result<Vec<Coordinate>, GameError> {
    let mut cells = Vec::with_capacity(length);
    for coord in orientation.extent(start, length) {
        match grid.get(coord)? {
            Cell::Empty => cells.push(coord),
            _ => {
                return Err(GameError::Overlap {
                    row: coord.row,
                    col: coord.col,
                })
            }
        }
    }
    Ok(cells)
}

/// Every in-bounds, non-overlapping placement for a ship of `length`.
pub fn valid_placements(grid: &Grid, length: usize) -> Vec<(Coordinate, Orientation)> {
    let mut out = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for start in grid.coordinates() {
            if check_placement(grid, length, start, orientation).is_ok() {
                out.push((start, orientation));
            }
        }
    }
    out
}

impl Board {
    /// Place ship `id` at `start` with `orientation`. Nothing changes on
    /// failure.
    pub fn place(
        &mut self,
        id: ShipId,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let (grid, fleet) = self.parts_mut();
        let ship = fleet.get_mut(id)?;
        if ship.is_placed() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let cells = check_placement(grid, ship.length(), start, orientation)?;
        for &coord in &cells {
            grid.mark(coord, Cell::Ship(id))?;
        }
        ship.place(cells, orientation)
    }

    /// Returns a random non-overlapping `(start, orientation)` for ship `id`.
    ///
    /// Samples up to `MAX_RANDOM_ATTEMPTS` candidates, then falls back to
    /// picking uniformly among all valid placements, so the call always
    /// terminates.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: ShipId,
    ) -> Result<(Coordinate, Orientation), GameError> {
        let len = self.ship(id)?.length();
        let size = self.size();
        if len == 0 || len > size {
            return Err(GameError::UnableToPlaceShip);
        }
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (size - 1, size - len),
                Orientation::Vertical => (size - len, size - 1),
            };
            let start = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if check_placement(self.grid(), len, start, orientation).is_ok() {
                return Ok((start, orientation));
            }
        }
        let candidates = valid_placements(self.grid(), len);
        if candidates.is_empty() {
            return Err(GameError::UnableToPlaceShip);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Place ship `id` at a random valid position.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        id: ShipId,
    ) -> Result<(Coordinate, Orientation), GameError> {
        let (start, orientation) = self.random_placement(rng, id)?;
        self.place(id, start, orientation)?;
        Ok((start, orientation))
    }

    /// Place every ship not yet on the board. When the remaining ships no
    /// longer fit, the board is cleared and the whole fleet retried.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for attempt in 0..MAX_FLEET_ATTEMPTS {
            if attempt > 0 {
                log::debug!("fleet placement restart #{}", attempt);
                self.clear();
            }
            let pending: Vec<ShipId> = self
                .fleet()
                .iter()
                .filter(|(_, ship)| !ship.is_placed())
                .map(|(id, _)| id)
                .collect();
            let mut stuck = false;
            for id in pending {
                match self.place_randomly(rng, id) {
                    Ok(_) => {}
                    Err(GameError::UnableToPlaceShip) => {
                        stuck = true;
                        break;
                    }
                    Err(e) => return Err(e),
                }
            }
            if !stuck {
                return Ok(());
            }
        }
        Err(GameError::UnableToPlaceShip)
    }
}
