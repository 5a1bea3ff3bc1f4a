//! Common types for the game: errors and guess results.

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess struck a ship segment.
    Hit,
    /// Guess landed on open water.
    Miss,
    /// Guess struck the last intact segment of a ship, carrying its name.
    Sink(&'static str),
}

impl GuessResult {
    /// `true` for both `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by grid, placement and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Grid size outside `1..=MAX_GRID_SIZE`, or too small for the fleet.
    InvalidGridSize(usize),
    /// Coordinate (or part of a ship) lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Placement collides with a ship already on the grid.
    Overlap { row: usize, col: usize },
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Coordinates handed to a ship do not match its length.
    InvalidPlacement,
    /// Ship identifier not present in the fleet.
    UnknownShip,
    /// No valid placement exists for the ship on the current grid.
    UnableToPlaceShip,
    /// The game cannot start before both fleets are placed.
    FleetIncomplete,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// The other side is due to move.
    NotYourTurn,
    /// A winner has been decided; no more guesses are processed.
    GameOver,
    /// The input collaborator ran out of input.
    InputClosed,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidGridSize(n) => write!(f, "Grid size {} is not playable", n),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            GameError::Overlap { row, col } => {
                write!(f, "Ship placement overlaps another ship at ({}, {})", row, col)
            }
            GameError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the grid"),
            GameError::InvalidPlacement => {
                write!(f, "Placement does not match the ship length")
            }
            GameError::UnknownShip => write!(f, "Ship not found in fleet"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::FleetIncomplete => write!(f, "Not every ship has been placed"),
            GameError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            GameError::NotYourTurn => write!(f, "It is not this side's turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::InputClosed => write!(f, "Input closed before the move was entered"),
        }
    }
}

impl core::error::Error for GameError {}
