//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, AiStrategy, Board, Coordinate, Game, GameError, GameState, GuessResult,
    Orientation, Outcome, Player, ShipId,
};

#[cfg(feature = "std")]
pub use crate::{
    CliPlayer, GameSession, JsonLinesSink, LogSink, ResultSink, SessionConfig, SinkConfig,
};
