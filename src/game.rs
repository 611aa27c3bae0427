use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    common::{EngineError, GestureOutcome, LevelError},
    config::{EngineConfig, RevealMask},
    grid::{normalize, Grid, Run},
    level::{LevelDefinition, LevelStore},
    matcher::{self, Resolution},
    solver,
};

/// Where the engine is in the gesture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// No gesture in progress.
    Idle,
    /// A gesture is in progress; the trace is non-empty.
    Tracing,
    /// The final level is complete. Terminal.
    LevelComplete,
}

/// Live state for the level being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    level: usize,
    tiles: Vec<char>,
    grid: Grid,
    runs: Vec<Run>,
    claimed: Vec<bool>,
    revealed: RevealMask,
    remaining: Vec<String>,
    trace: Vec<usize>,
}

impl Session {
    /// Fresh session for level `level` built from its definition.
    pub fn new(level: usize, def: &LevelDefinition) -> Self {
        let grid = *def.grid();
        let runs = grid.runs();
        Self {
            level,
            tiles: def.letters().to_vec(),
            grid,
            claimed: alloc::vec![false; runs.len()],
            runs,
            revealed: RevealMask::new(),
            remaining: def.target_words().iter().map(|w| normalize(w)).collect(),
            trace: Vec::new(),
        }
    }

    /// 1-based level index.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Letter tiles in their current layout.
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn revealed(&self) -> RevealMask {
        self.revealed
    }

    pub fn is_revealed(&self, cell: usize) -> bool {
        self.revealed.get(cell).unwrap_or(false)
    }

    /// Target words still to find, lowercased.
    pub fn remaining_words(&self) -> &[String] {
        &self.remaining
    }

    pub fn trace(&self) -> &[usize] {
        &self.trace
    }

    /// Word spelled by the current trace.
    pub fn candidate(&self) -> String {
        solver::spell(&self.tiles, &self.trace)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// One grid cell as the presentation layer draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct CellView {
    pub letter: Option<char>,
    pub revealed: bool,
}

/// Snapshot of everything the screen needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionView {
    pub level: usize,
    pub state: EngineState,
    pub tiles: Vec<char>,
    pub cells: Vec<CellView>,
    pub remaining_words: Vec<String>,
    pub trace: Vec<usize>,
    pub current_word: String,
}

/// Gesture-driven matching engine for one player.
pub struct MatchEngine {
    store: Arc<LevelStore>,
    config: EngineConfig,
    session: Session,
    state: EngineState,
}

impl MatchEngine {
    /// Start on level 1 with the strict policy.
    pub fn new(store: Arc<LevelStore>) -> Result<Self, LevelError> {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: Arc<LevelStore>, config: EngineConfig) -> Result<Self, LevelError> {
        let session = Session::new(config.start_level, store.get(config.start_level)?);
        info!("starting at level {} of {}", config.start_level, store.count());
        Ok(Self {
            store,
            config,
            session,
            state: EngineState::Idle,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<LevelStore> {
        &self.store
    }

    /// 1-based index of the level in play.
    pub fn level(&self) -> usize {
        self.session.level
    }

    /// True once the final level has been completed.
    pub fn is_finished(&self) -> bool {
        self.state == EngineState::LevelComplete
    }

    /// Word spelled so far by the gesture in progress.
    pub fn current_word(&self) -> String {
        self.session.candidate()
    }

    /// Pointer-down on a tile. Returns `Ok(false)` and does nothing when a
    /// gesture is already in progress.
    pub fn begin_gesture(&mut self, tile: usize) -> Result<bool, EngineError> {
        match self.state {
            EngineState::LevelComplete => return Err(EngineError::Finished),
            EngineState::Tracing => {
                debug!("begin_gesture({}) ignored: already tracing", tile);
                return Ok(false);
            }
            EngineState::Idle => {}
        }
        self.check_tile(tile)?;
        self.session.trace.push(tile);
        self.state = EngineState::Tracing;
        debug!("gesture started on tile {}", tile);
        Ok(true)
    }

    /// Pointer-enter on a tile during a gesture. Returns `Ok(false)` when the
    /// tile is already part of the trace.
    pub fn extend_gesture(&mut self, tile: usize) -> Result<bool, EngineError> {
        self.ensure_tracing()?;
        self.check_tile(tile)?;
        if self.session.trace.contains(&tile) {
            return Ok(false);
        }
        self.session.trace.push(tile);
        debug!("trace now {:?}", self.session.trace);
        Ok(true)
    }

    /// Pointer-up. Resolves the traced word, clears the trace and, when the
    /// level is done, loads the next one before returning.
    pub fn end_gesture(&mut self) -> Result<GestureOutcome, EngineError> {
        self.ensure_tracing()?;
        let word = self.session.candidate();
        self.session.trace.clear();
        self.state = EngineState::Idle;

        let resolution = matcher::resolve(
            &self.session.runs,
            &self.session.claimed,
            &self.session.remaining,
            &word,
            self.config.policy,
        );

        let (cells, newly_found) = match resolution {
            Resolution::Miss => {
                debug!("{:?}: no match", word);
                return Ok(GestureOutcome::NoMatch { word });
            }
            Resolution::Run { run, fresh } => {
                let cells = self.session.runs[run].cells.clone();
                if fresh {
                    for &cell in &cells {
                        self.session.revealed.set(cell)?;
                    }
                    self.session.claimed[run] = true;
                }
                // a word listed more often than the grid spells it is still
                // crossed off on an already traced run
                let removed = matcher::take_word(&mut self.session.remaining, &word);
                if removed {
                    info!(
                        "{:?} found at {:?} ({} left)",
                        word,
                        cells,
                        self.session.remaining.len()
                    );
                } else {
                    debug!("{:?}: not an outstanding target", word);
                }
                (cells, removed)
            }
            Resolution::Target => {
                matcher::take_word(&mut self.session.remaining, &word);
                info!(
                    "{:?} acknowledged without a run ({} left)",
                    word,
                    self.session.remaining.len()
                );
                (Vec::new(), true)
            }
        };

        if !newly_found || !self.session.is_complete() {
            return Ok(match resolution {
                Resolution::Target => GestureOutcome::Acknowledged { word },
                _ => GestureOutcome::Match {
                    word,
                    cells,
                    newly_found,
                },
            });
        }
        Ok(self.advance(word, cells))
    }

    /// Replace the session with the next level, or settle as finished.
    fn advance(&mut self, word: String, cells: Vec<usize>) -> GestureOutcome {
        let completed_level = self.session.level;
        let next_level = completed_level + 1;
        let store = Arc::clone(&self.store);
        match store.get(next_level) {
            Ok(def) => {
                info!("level {} complete, loading level {}", completed_level, next_level);
                self.session = Session::new(next_level, def);
                self.state = EngineState::Idle;
                GestureOutcome::LevelComplete {
                    word,
                    cells,
                    completed_level,
                    next_level,
                    next_level_letters: def.letters().to_vec(),
                    next_level_grid: *def.grid(),
                }
            }
            Err(_) => {
                info!("level {} complete, no further levels", completed_level);
                self.state = EngineState::LevelComplete;
                GestureOutcome::NoMoreLevels {
                    word,
                    cells,
                    completed_level,
                }
            }
        }
    }

    /// Reorder the offered tiles. Only allowed between gestures.
    pub fn shuffle_tiles<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        match self.state {
            EngineState::LevelComplete => Err(EngineError::Finished),
            EngineState::Tracing => Err(EngineError::Tracing),
            EngineState::Idle => {
                self.session.tiles.shuffle(rng);
                debug!("tiles shuffled to {:?}", self.session.tiles);
                Ok(())
            }
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView {
        let cells = self
            .session
            .grid
            .cells()
            .iter()
            .enumerate()
            .map(|(i, cell)| CellView {
                letter: cell.letter(),
                revealed: self.session.is_revealed(i),
            })
            .collect();
        SessionView {
            level: self.session.level,
            state: self.state,
            tiles: self.session.tiles.clone(),
            cells,
            remaining_words: self.session.remaining.clone(),
            trace: self.session.trace.clone(),
            current_word: self.session.candidate(),
        }
    }

    fn ensure_tracing(&self) -> Result<(), EngineError> {
        match self.state {
            EngineState::Tracing => Ok(()),
            EngineState::Idle => {
                warn!("gesture call with no gesture in progress");
                Err(EngineError::NotTracing)
            }
            EngineState::LevelComplete => Err(EngineError::Finished),
        }
    }

    fn check_tile(&self, tile: usize) -> Result<(), EngineError> {
        let tiles = self.session.tiles.len();
        if tile >= tiles {
            warn!("rejected tile {} (have {})", tile, tiles);
            return Err(EngineError::InvalidTile { index: tile, tiles });
        }
        Ok(())
    }
}
