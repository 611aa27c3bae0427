//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutoPlayer, Command, EngineError, GestureOutcome, Grid, LevelDefinition, LevelStore,
    MatchEngine, Player, PlayerNode, SessionView,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
