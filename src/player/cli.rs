#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    board::{Board, TargetView},
    common::{GameError, GuessResult},
    config::ROW_LABELS,
    grid::Coordinate,
    render,
    ship::{Orientation, ShipId},
};

use super::Player;

/// Parse `H`/`V` (any case, surrounding whitespace ignored).
pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.trim().to_ascii_uppercase().as_str() {
        "H" => Ok(Orientation::Horizontal),
        "V" => Ok(Orientation::Vertical),
        "" => Err("Empty input - enter H or V".to_string()),
        other => Err(format!("Invalid orientation '{}' - use H or V", other)),
    }
}

/// Parse a row letter followed by a 1-based column, e.g. `A5`, for a grid of
/// `size` rows and columns.
pub fn parse_coord(input: &str, size: usize) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let row_ch = chars
        .next()
        .ok_or("No row letter")?
        .to_ascii_uppercase();
    let last_row = ROW_LABELS.chars().nth(size.saturating_sub(1)).unwrap_or('A');
    if !row_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid row '{}' - must be a letter A-{}", row_ch, last_row));
    }
    let row = ROW_LABELS
        .find(row_ch)
        .filter(|&r| r < size)
        .ok_or_else(|| format!("Row '{}' out of bounds - must be A-{}", row_ch, last_row))?;
    let col_str: String = chars.collect();
    if col_str.is_empty() {
        return Err("Too short - need row letter and column number (e.g., A5)".to_string());
    }
    let col: usize = col_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 1-{}", col_str, size))?;
    if col == 0 || col > size {
        return Err(format!("Column {} out of bounds - must be 1-{}", col, size));
    }
    Ok(Coordinate::new(row, col - 1))
}

/// Human player driven by line-based text input.
pub struct CliPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    random_placement: bool,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            random_placement: false,
        }
    }

    /// Skip the placement prompts and lay the whole fleet out randomly.
    pub fn with_random_placement(mut self, random: bool) -> Self {
        self.random_placement = random;
        self
    }

    /// Give back the output sink, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }

    /// Prompt and read one trimmed line. End of input is `InputClosed`.
    fn ask(&mut self, prompt: fmt::Arguments<'_>) -> Result<String, GameError> {
        self.say(prompt);
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    fn place_one(&mut self, rng: &mut SmallRng, board: &mut Board, id: ShipId) -> Result<(), GameError> {
        let (name, length) = {
            let ship = board.ship(id)?;
            (ship.name(), ship.length())
        };
        loop {
            let line = self.ask(format_args!(
                "Enter orientation for your {} (size {}) (H for horizontal, V for vertical, ENTER for random): ",
                name, length
            ))?;
            if line.is_empty() {
                let (start, orientation) = board.place_randomly(rng, id)?;
                self.say(format_args!(
                    "{} randomly placed at {} ({:?})\n",
                    name, start, orientation
                ));
                return Ok(());
            }
            let orientation = match parse_orientation(&line) {
                Ok(o) => o,
                Err(e) => {
                    self.say(format_args!("Invalid orientation: {}\n", e));
                    continue;
                }
            };
            let line = self.ask(format_args!(
                "Enter the starting coordinates for your {} (e.g., A5): ",
                name
            ))?;
            let start = match parse_coord(&line, board.size()) {
                Ok(c) => c,
                Err(e) => {
                    self.say(format_args!("Invalid coordinates: {}\n", e));
                    continue;
                }
            };
            match board.place(id, start, orientation) {
                Ok(()) => {
                    self.say(format_args!("{} placed at {}\n", name, start));
                    return Ok(());
                }
                Err(e) => {
                    self.say(format_args!("Invalid placement: {}\n", e));
                    self.say(format_args!(
                        "   Make sure the ship fits on the grid and does not overlap another ship.\n"
                    ));
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        if self.random_placement {
            board.place_fleet_randomly(rng)?;
            self.say(format_args!(
                "\n{}\nYour fleet was placed randomly.\n",
                render::render_grid(board, true)
            ));
            return Ok(());
        }
        self.say(format_args!("Place your ships on the grid.\n"));
        let pending: Vec<ShipId> = board
            .fleet()
            .iter()
            .filter(|(_, ship)| !ship.is_placed())
            .map(|(id, _)| id)
            .collect();
        for id in pending {
            self.say(format_args!("\n{}", render::render_grid(board, true)));
            self.place_one(rng, board, id)?;
        }
        self.say(format_args!(
            "\n{}\nAll ships placed! Ready to begin battle.\n",
            render::render_grid(board, true)
        ));
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent: &TargetView<'_>,
    ) -> Result<Coordinate, GameError> {
        loop {
            let line = self.ask(format_args!("\nEnter target coordinates (e.g., A5): "))?;
            match parse_coord(&line, opponent.size()) {
                Ok(coord) if opponent.is_guessed(coord) => {
                    self.say(format_args!(
                        "You already fired at {}! Choose another target.\n",
                        coord
                    ));
                }
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    self.say(format_args!("Invalid coordinate: {}\n", e));
                    self.say(format_args!("   Example: A5, B10, J1\n"));
                }
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coordinate, result: GuessResult) {
        match result {
            GuessResult::Hit => self.say(format_args!("HIT! Your shot at {} struck an enemy ship!\n", coord)),
            GuessResult::Miss => self.say(format_args!("Miss. Your shot at {} hit only water.\n", coord)),
            GuessResult::Sink(name) => {
                self.say(format_args!("SUNK! You destroyed the enemy's {}!\n", name))
            }
        }
    }

    fn handle_opponent_guess(&mut self, coord: Coordinate, result: GuessResult) {
        match result {
            GuessResult::Hit => self.say(format_args!("Enemy hit your ship at {}!\n", coord)),
            GuessResult::Miss => self.say(format_args!("Enemy missed at {}.\n", coord)),
            GuessResult::Sink(name) => self.say(format_args!(
                "Ship lost! Enemy destroyed your {} at {}.\n",
                name, coord
            )),
        }
    }
}
