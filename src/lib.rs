#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod player;
pub mod prelude;
pub mod render;
#[cfg(feature = "std")]
pub mod session;
mod ship;
#[cfg(feature = "std")]
pub mod sink;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::{check_placement, valid_placements};
pub use player::{AiPlayer, AiStrategy, Player};
#[cfg(feature = "std")]
pub use player::{parse_coord, parse_orientation, CliPlayer};
#[cfg(feature = "std")]
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use sink::*;
