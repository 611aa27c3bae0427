use alloc::boxed::Box;
use log::info;
use rand::rngs::SmallRng;

use crate::{
    common::{EngineError, GestureOutcome},
    game::MatchEngine,
    player::{Command, Player},
};

/// How a run of `PlayerNode::run` ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RunSummary {
    pub levels_completed: usize,
    pub gestures: usize,
    /// True when the final level was completed.
    pub finished: bool,
    /// Level the player stopped on, when not finished.
    pub stopped_at_level: Option<usize>,
}

/// Drives a `Player` against a `MatchEngine`, turning each traced path into
/// begin/extend/end gesture calls.
pub struct PlayerNode {
    player: Box<dyn Player>,
    engine: MatchEngine,
    gestures: usize,
    levels_completed: usize,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, engine: MatchEngine) -> Self {
        Self {
            player,
            engine,
            gestures: 0,
            levels_completed: 0,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn gesture_count(&self) -> usize {
        self.gestures
    }

    /// Play until the last level is done or the player stops.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<RunSummary, EngineError> {
        while !self.engine.is_finished() {
            let view = self.engine.view();
            match self.player.next_command(rng, &view) {
                Command::Stop => {
                    info!("player stopped at level {}", self.engine.level());
                    break;
                }
                Command::Shuffle => self.engine.shuffle_tiles(rng)?,
                Command::Trace(tiles) => {
                    let outcome = self.trace(&tiles)?;
                    self.player.handle_outcome(&outcome);
                }
            }
        }
        Ok(self.summary())
    }

    /// Feed one traced path to the engine as a single gesture.
    pub fn trace(&mut self, tiles: &[usize]) -> Result<GestureOutcome, EngineError> {
        let (&first, rest) = tiles.split_first().ok_or(EngineError::NotTracing)?;
        // reject bad paths before the gesture starts so the engine stays idle
        let offered = self.engine.session().tiles().len();
        if let Some(&index) = tiles.iter().find(|&&t| t >= offered) {
            return Err(EngineError::InvalidTile {
                index,
                tiles: offered,
            });
        }
        self.engine.begin_gesture(first)?;
        for &tile in rest {
            self.engine.extend_gesture(tile)?;
        }
        let outcome = self.engine.end_gesture()?;
        self.gestures += 1;
        if matches!(
            outcome,
            GestureOutcome::LevelComplete { .. } | GestureOutcome::NoMoreLevels { .. }
        ) {
            self.levels_completed += 1;
        }
        Ok(outcome)
    }

    pub fn summary(&self) -> RunSummary {
        let finished = self.engine.is_finished();
        RunSummary {
            levels_completed: self.levels_completed,
            gestures: self.gestures,
            finished,
            stopped_at_level: if finished {
                None
            } else {
                Some(self.engine.level())
            },
        }
    }
}
