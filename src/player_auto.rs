use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::{
    common::GestureOutcome,
    game::SessionView,
    player::{Command, Player},
    solver,
};

/// Automated player that traces outstanding target words.
///
/// Each word is tried at most once between two gestures that made progress,
/// so a level whose targets the grid cannot accept ends in `Command::Stop`
/// instead of looping.
#[derive(Debug, Default)]
pub struct AutoPlayer {
    tried: Vec<String>,
}

impl AutoPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for AutoPlayer {
    fn next_command(&mut self, rng: &mut SmallRng, view: &SessionView) -> Command {
        let options: Vec<(&String, Vec<usize>)> = view
            .remaining_words
            .iter()
            .filter(|w| !self.tried.contains(*w))
            .filter_map(|w| solver::trace_for_word(&view.tiles, w).map(|t| (w, t)))
            .collect();
        match options.choose(rng) {
            Some((word, trace)) => {
                self.tried.push((*word).clone());
                Command::Trace(trace.clone())
            }
            None => Command::Stop,
        }
    }

    fn handle_outcome(&mut self, outcome: &GestureOutcome) {
        if outcome.made_progress() {
            self.tried.clear();
        }
    }
}
