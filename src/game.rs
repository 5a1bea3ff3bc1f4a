use alloc::string::String;

use crate::{
    board::Board,
    common::{GameError, GuessResult},
    config::fleet_fits,
    grid::Coordinate,
};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fleets are still being placed.
    Setup,
    AwaitingPlayerMove,
    AwaitingComputerMove,
    PlayerWon,
    ComputerWon,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::PlayerWon | GameState::ComputerWon)
    }
}

/// Final result from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Outcome {
    Win,
    Lose,
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
        }
    }
}

/// Resolve one guess against the defending board.
///
/// A ship cell becomes `Hit` and its ship takes one point of damage; an empty
/// cell becomes `Miss`. Cells already targeted are rejected untouched.
pub fn apply_guess(defender: &mut Board, coord: Coordinate) -> Result<GuessResult, GameError> {
    defender.guess(coord)
}

/// Human vs. computer game: both boards, whose turn it is and the player's
/// move count.
pub struct Game {
    player_name: String,
    player: Board,
    computer: Board,
    state: GameState,
    player_moves: usize,
}

impl Game {
    /// New game in `Setup` with empty `size`×`size` boards.
    pub fn new(player_name: impl Into<String>, size: usize) -> Result<Self, GameError> {
        if !fleet_fits(size) {
            return Err(GameError::InvalidGridSize(size));
        }
        Ok(Self {
            player_name: player_name.into(),
            player: Board::new(size)?,
            computer: Board::new(size)?,
            state: GameState::Setup,
            player_moves: 0,
        })
    }

    /// Game in `Setup` over boards prepared elsewhere, e.g. with a custom
    /// fleet. Both boards must have the same size.
    pub fn with_boards(
        player_name: impl Into<String>,
        player: Board,
        computer: Board,
    ) -> Result<Self, GameError> {
        if player.size() != computer.size() {
            return Err(GameError::InvalidGridSize(computer.size()));
        }
        Ok(Self {
            player_name: player_name.into(),
            player,
            computer,
            state: GameState::Setup,
            player_moves: 0,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn grid_size(&self) -> usize {
        self.player.size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Guesses made by the human player so far.
    pub fn player_moves(&self) -> usize {
        self.player_moves
    }

    pub fn player_board(&self) -> &Board {
        &self.player
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    /// Player's board for ship placement; only available during setup.
    pub fn player_board_mut(&mut self) -> Option<&mut Board> {
        (self.state == GameState::Setup).then_some(&mut self.player)
    }

    /// Computer's board for ship placement; only available during setup.
    pub fn computer_board_mut(&mut self) -> Option<&mut Board> {
        (self.state == GameState::Setup).then_some(&mut self.computer)
    }

    /// Leave setup. Both fleets must be fully placed, and a game can only be
    /// started once.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.state != GameState::Setup {
            return Err(GameError::NotYourTurn);
        }
        if !self.player.fleet().all_placed() || !self.computer.fleet().all_placed() {
            return Err(GameError::FleetIncomplete);
        }
        self.state = GameState::AwaitingPlayerMove;
        log::info!("game started for {}", self.player_name);
        Ok(())
    }

    fn expect_turn(&self, turn: GameState) -> Result<(), GameError> {
        if self.state == turn {
            Ok(())
        } else if self.state.is_terminal() {
            Err(GameError::GameOver)
        } else if self.state == GameState::Setup {
            Err(GameError::FleetIncomplete)
        } else {
            Err(GameError::NotYourTurn)
        }
    }

    /// The human fires at the computer's board.
    pub fn player_guess(&mut self, coord: Coordinate) -> Result<GuessResult, GameError> {
        self.expect_turn(GameState::AwaitingPlayerMove)?;
        let result = apply_guess(&mut self.computer, coord)?;
        self.player_moves += 1;
        log::debug!("player fires at {}: {:?}", coord, result);
        self.state = if self.computer.all_sunk() {
            GameState::PlayerWon
        } else {
            GameState::AwaitingComputerMove
        };
        Ok(result)
    }

    /// The computer fires at the human's board. Not counted as a move.
    pub fn computer_guess(&mut self, coord: Coordinate) -> Result<GuessResult, GameError> {
        self.expect_turn(GameState::AwaitingComputerMove)?;
        let result = apply_guess(&mut self.player, coord)?;
        log::debug!("computer fires at {}: {:?}", coord, result);
        self.state = if self.player.all_sunk() {
            GameState::ComputerWon
        } else {
            GameState::AwaitingPlayerMove
        };
        Ok(result)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// `Some` once a side has won.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::PlayerWon => Some(Outcome::Win),
            GameState::ComputerWon => Some(Outcome::Lose),
            _ => None,
        }
    }
}
