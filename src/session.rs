#![cfg(feature = "std")]

use std::fmt;
use std::io::Write;

use rand::rngs::SmallRng;

use crate::{
    common::GameError,
    config::GRID_SIZE,
    game::{Game, Outcome},
    player::{AiStrategy, Player},
    render,
    sink::ResultSink,
};

/// Settings for one interactive game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub player_name: String,
    pub grid_size: usize,
    pub strategy: AiStrategy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            grid_size: GRID_SIZE,
            strategy: AiStrategy::Random,
        }
    }
}

/// How a finished session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub player_moves: usize,
    pub computer_moves: usize,
    /// Whether the result sink accepted the result.
    pub recorded: bool,
}

/// Runs one game from fleet placement to the recorded result.
pub struct GameSession {
    game: Game,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    sink: Box<dyn ResultSink>,
    display: Box<dyn Write>,
}

impl GameSession {
    pub fn new(
        game: Game,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        sink: Box<dyn ResultSink>,
        display: Box<dyn Write>,
    ) -> Self {
        Self {
            game,
            human,
            computer,
            sink,
            display,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn show(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.display.write_fmt(args);
        let _ = self.display.flush();
    }

    fn show_boards(&mut self) {
        let view = render::render_side_by_side(self.game.player_board(), self.game.computer_board());
        self.show(format_args!("{}", view));
    }

    fn setup(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        self.show(format_args!("Your grid and the computer's grid (hidden):\n"));
        self.show_boards();
        if let Some(board) = self.game.player_board_mut() {
            self.human.place_ships(rng, board)?;
        }
        if let Some(board) = self.game.computer_board_mut() {
            self.computer.place_ships(rng, board)?;
        }
        self.game.start()
    }

    /// Play until one fleet is sunk, then hand the result to the sink. A sink
    /// failure is logged and reported in `recorded`; it never changes the
    /// outcome.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<SessionReport, GameError> {
        self.setup(rng)?;
        let mut computer_moves = 0;

        let outcome = loop {
            self.show(format_args!("\nYour grid and the computer's grid:\n"));
            self.show_boards();

            let coord = self
                .human
                .select_target(rng, &self.game.computer_board().target_view())?;
            let result = self.game.player_guess(coord)?;
            self.human.handle_guess_result(coord, result);
            self.computer.handle_opponent_guess(coord, result);
            if let Some(outcome) = self.game.outcome() {
                break outcome;
            }

            let coord = self
                .computer
                .select_target(rng, &self.game.player_board().target_view())?;
            let result = self.game.computer_guess(coord)?;
            computer_moves += 1;
            self.computer.handle_guess_result(coord, result);
            self.human.handle_opponent_guess(coord, result);
            if let Some(outcome) = self.game.outcome() {
                break outcome;
            }
        };

        self.show_boards();
        match outcome {
            Outcome::Win => self.show(format_args!("Congratulations! You've won the game!\n")),
            Outcome::Lose => self.show(format_args!("The computer has won the game!\n")),
        }

        let player_moves = self.game.player_moves();
        let recorded = match self
            .sink
            .record_result(self.game.player_name(), outcome, player_moves)
        {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not record game result: {}", e);
                false
            }
        };
        self.show(format_args!(
            "Game Over. You {}! Moves taken: {}\n",
            outcome.to_string().to_uppercase(),
            player_moves
        ));
        log::info!(
            "{} vs {}: {} after {} moves",
            self.human.name(),
            self.computer.name(),
            outcome,
            player_moves
        );

        Ok(SessionReport {
            outcome,
            player_moves,
            computer_moves,
            recorded,
        })
    }
}
