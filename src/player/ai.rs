use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{
    ai,
    board::{Board, TargetView},
    common::GameError,
    grid::Coordinate,
};

use super::Player;

/// How the computer picks its next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiStrategy {
    /// Uniformly random among cells not yet guessed.
    #[default]
    Random,
    /// Sample from a placement-density map biased toward known hits.
    Probability,
}

/// Computer player: random fleet layout plus the chosen targeting strategy.
pub struct AiPlayer {
    name: String,
    strategy: AiStrategy,
}

impl AiPlayer {
    pub fn new(strategy: AiStrategy) -> Self {
        Self::named("Computer", strategy)
    }

    pub fn named(name: impl Into<String>, strategy: AiStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    pub fn strategy(&self) -> AiStrategy {
        self.strategy
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(AiStrategy::default())
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        board.place_fleet_randomly(rng)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &TargetView<'_>,
    ) -> Result<Coordinate, GameError> {
        let pick = match self.strategy {
            AiStrategy::Random => ai::random_guess(opponent, rng),
            AiStrategy::Probability => ai::calc_pdf_and_guess(opponent, rng),
        };
        pick.ok_or(GameError::GameOver)
    }
}
