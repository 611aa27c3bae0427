use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::{common::GestureOutcome, game::SessionView};

/// What a player wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Trace these tiles, in order, as one gesture.
    Trace(Vec<usize>),
    /// Reorder the offered tiles.
    Shuffle,
    /// Leave the game.
    Stop,
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Choosing the next gesture from what is on screen
/// - Reacting to the outcome of each gesture
pub trait Player {
    /// Choose the next command given the current session snapshot.
    fn next_command(&mut self, rng: &mut SmallRng, view: &SessionView) -> Command;

    /// Inform the player of the outcome of its last gesture.
    fn handle_outcome(&mut self, _outcome: &GestureOutcome) {}
}
