//! Player trait and implementations
//!
//! - AiPlayer: the computer, random or probability-based targeting
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;

use crate::{
    board::{Board, TargetView},
    common::{GameError, GuessResult},
    grid::Coordinate,
};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its board
/// - Selecting targets to attack
/// - Handling feedback from guesses
pub trait Player {
    /// Display name used in logs and results.
    fn name(&self) -> &str;

    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError>;

    /// Choose the next target on the opponent board. Must be a cell not yet
    /// guessed.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &TargetView<'_>,
    ) -> Result<Coordinate, GameError>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: Coordinate, _result: GuessResult) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _coord: Coordinate, _result: GuessResult) {}
}

pub mod ai;
pub use ai::{AiPlayer, AiStrategy};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coord, parse_orientation, CliPlayer};
