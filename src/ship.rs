//! Ship definitions, placement records and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::grid::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The `len` cells covered by a ship starting at `start`. No bounds check.
    pub fn extent(self, start: Coordinate, len: usize) -> impl Iterator<Item = Coordinate> {
        (0..len).map(move |i| match self {
            Orientation::Horizontal => Coordinate::new(start.row, start.col + i),
            Orientation::Vertical => Coordinate::new(start.row + i, start.col),
        })
    }
}

/// Type of ship: name, length and the marker drawn on its owner's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
    marker: char,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize, marker: char) -> Self {
        Self {
            name,
            length,
            marker,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn marker(&self) -> char {
        self.marker
    }
}

/// Position of a ship within its fleet. Grid cells refer to ships by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub usize);

#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Option<Orientation>,
    coordinates: Vec<Coordinate>,
    hits: usize,
}

impl Ship {
    /// An unplaced, undamaged ship.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            orientation: None,
            coordinates: Vec::new(),
            hits: 0,
        }
    }

    /// Record where the ship lies. Only the first call succeeds.
    pub fn place(
        &mut self,
        coordinates: Vec<Coordinate>,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.is_placed() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        if coordinates.len() != self.ship_type.length() {
            return Err(GameError::InvalidPlacement);
        }
        self.coordinates = coordinates;
        self.orientation = Some(orientation);
        Ok(())
    }

    /// Forget the placement and any damage.
    pub fn reset(&mut self) {
        self.coordinates.clear();
        self.orientation = None;
        self.hits = 0;
    }

    /// Count one hit. Returns `false` once the ship is already sunk.
    pub fn register_hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        true
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    pub fn is_placed(&self) -> bool {
        !self.coordinates.is_empty()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", orientation: {:?}, hits: {}/{}, cells: {:?} }}",
            self.ship_type.name(),
            self.orientation,
            self.hits,
            self.ship_type.length(),
            self.coordinates,
        )
    }
}

/// The ships belonging to one side, indexed by `ShipId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new(types: &[ShipType]) -> Self {
        Self {
            ships: types.iter().copied().map(Ship::new).collect(),
        }
    }

    /// One of each ship in `config::FLEET`.
    pub fn standard() -> Self {
        Self::new(&crate::config::FLEET)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: ShipId) -> Result<&Ship, GameError> {
        self.ships.get(id.0).ok_or(GameError::UnknownShip)
    }

    pub fn get_mut(&mut self, id: ShipId) -> Result<&mut Ship, GameError> {
        self.ships.get_mut(id.0).ok_or(GameError::UnknownShip)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships.iter().enumerate().map(|(i, s)| (ShipId(i), s))
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Lengths of ships still afloat.
    pub fn lengths_remaining(&self) -> Vec<usize> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(Ship::length)
            .collect()
    }

    pub(crate) fn reset(&mut self) {
        self.ships.iter_mut().for_each(Ship::reset);
    }
}
