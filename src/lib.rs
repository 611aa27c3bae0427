#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod common;
mod config;
mod game;
mod grid;
mod level;
pub mod matcher;
mod player;
mod player_auto;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
mod player_node;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
pub mod solver;

pub use bitboard::{BitBoard, BitBoardError, SetCells};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use level::*;
pub use player::*;
pub use player_auto::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use player_node::*;
