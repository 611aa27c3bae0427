//! Common types for the word grid: gesture outcomes and error enums.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::grid::Grid;

/// Result of a finished gesture, as reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The traced word spells a row or column run.
    Match {
        word: String,
        /// Cells of the matched run, in reading order.
        cells: Vec<usize>,
        /// True when the word was crossed off the remaining target words.
        newly_found: bool,
    },
    /// A target word no run spells was crossed off without revealing cells.
    /// Only produced under a lenient `MatchPolicy`.
    Acknowledged { word: String },
    /// Nothing matched; the session is untouched.
    NoMatch { word: String },
    /// The last target word was found and the next level is loaded.
    LevelComplete {
        word: String,
        cells: Vec<usize>,
        completed_level: usize,
        next_level: usize,
        next_level_letters: Vec<char>,
        next_level_grid: Grid,
    },
    /// The last target word of the final level was found.
    NoMoreLevels {
        word: String,
        cells: Vec<usize>,
        completed_level: usize,
    },
}

impl GestureOutcome {
    /// The candidate word the gesture spelled.
    pub fn word(&self) -> &str {
        match self {
            GestureOutcome::Match { word, .. }
            | GestureOutcome::Acknowledged { word }
            | GestureOutcome::NoMatch { word }
            | GestureOutcome::LevelComplete { word, .. }
            | GestureOutcome::NoMoreLevels { word, .. } => word,
        }
    }

    /// Cells revealed by this gesture (empty when none).
    pub fn cells(&self) -> &[usize] {
        match self {
            GestureOutcome::Match { cells, .. }
            | GestureOutcome::LevelComplete { cells, .. }
            | GestureOutcome::NoMoreLevels { cells, .. } => cells,
            GestureOutcome::Acknowledged { .. } | GestureOutcome::NoMatch { .. } => &[],
        }
    }

    /// True when the gesture crossed a word off the remaining target words.
    pub fn made_progress(&self) -> bool {
        match self {
            GestureOutcome::Match { newly_found, .. } => *newly_found,
            GestureOutcome::NoMatch { .. } => false,
            _ => true,
        }
    }
}

/// Errors building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid did not have exactly 16 cells.
    WrongCellCount { found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::WrongCellCount { found } => write!(
                f,
                "Grid must have {} cells, found {}",
                crate::config::GRID_CELLS,
                found
            ),
        }
    }
}

/// Errors returned by level lookup and level-set construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No level with this 1-based index.
    NotFound { index: usize },
    /// A level set needs at least one level.
    Empty,
    /// Level key is neither `levelN` nor `N` with N >= 1.
    BadIdentifier(String),
    /// Level numbers must run 1..=N without holes.
    Gap { expected: usize },
    /// Two keys name the same level.
    Duplicate { index: usize },
    /// A level offers no letter tiles.
    NoLetters { index: usize },
    /// A level lists no target words.
    NoTargets { index: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::NotFound { index } => write!(f, "Level {} not found", index),
            LevelError::Empty => write!(f, "Level set is empty"),
            LevelError::BadIdentifier(key) => write!(f, "Bad level identifier {:?}", key),
            LevelError::Gap { expected } => write!(f, "Level {} is missing", expected),
            LevelError::Duplicate { index } => write!(f, "Level {} is defined twice", index),
            LevelError::NoLetters { index } => write!(f, "Level {} offers no letters", index),
            LevelError::NoTargets { index } => write!(f, "Level {} has no target words", index),
        }
    }
}

/// Contract violations at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Tile index is not one of the offered letter tiles.
    InvalidTile { index: usize, tiles: usize },
    /// Gesture call made while no gesture is in progress.
    NotTracing,
    /// Operation needs an idle engine but a gesture is in progress.
    Tracing,
    /// The final level is complete; no further input is accepted.
    Finished,
    /// Reveal bookkeeping went out of bounds.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        EngineError::BitBoard(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidTile { index, tiles } => {
                write!(f, "Tile {} is not offered (have {} tiles)", index, tiles)
            }
            EngineError::NotTracing => write!(f, "No gesture in progress"),
            EngineError::Tracing => write!(f, "A gesture is in progress"),
            EngineError::Finished => write!(f, "All levels are complete"),
            EngineError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for LevelError {}
#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
