//! Level definitions and the read-only level store.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::common::LevelError;
use crate::config::{LevelTemplate, BUILTIN_LEVELS};
use crate::grid::{normalize, Grid};
use crate::solver;

/// Immutable authored data for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDefinition {
    letters: Vec<char>,
    #[cfg_attr(feature = "std", serde(rename = "targetWords"))]
    target_words: Vec<String>,
    grid: Grid,
}

/// Authoring problems found by `LevelDefinition::lint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// No row or column run spells this target word.
    UnplacedTarget { word: String },
    /// The word is listed more often than there are runs spelling it.
    MoreTargetsThanRuns {
        word: String,
        targets: usize,
        runs: usize,
    },
    /// The offered letters cannot spell this target word.
    UnformableTarget { word: String },
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintIssue::UnplacedTarget { word } => {
                write!(f, "target {:?} is not spelled by any row or column", word)
            }
            LintIssue::MoreTargetsThanRuns {
                word,
                targets,
                runs,
            } => write!(
                f,
                "target {:?} is listed {} times but only {} runs spell it",
                word, targets, runs
            ),
            LintIssue::UnformableTarget { word } => {
                write!(f, "target {:?} cannot be traced with the offered letters", word)
            }
        }
    }
}

impl LevelDefinition {
    pub fn new(letters: Vec<char>, target_words: Vec<String>, grid: Grid) -> Self {
        Self {
            letters,
            target_words,
            grid,
        }
    }

    fn from_template(t: &LevelTemplate) -> Self {
        Self {
            letters: t.letters.to_vec(),
            target_words: t.target_words.iter().map(|w| w.to_string()).collect(),
            grid: Grid::from_chars(t.grid),
        }
    }

    /// Letters offered as tiles, in authored order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn target_words(&self) -> &[String] {
        &self.target_words
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Check the authoring invariants the engine relies on but never verifies.
    pub fn lint(&self) -> Vec<LintIssue> {
        let runs = self.grid.runs();
        let normalized: Vec<String> = self.target_words.iter().map(|w| normalize(w)).collect();
        let mut issues = Vec::new();

        for (i, word) in normalized.iter().enumerate() {
            if normalized[..i].contains(word) {
                continue;
            }
            let targets = normalized.iter().filter(|w| *w == word).count();
            let spelled = runs.iter().filter(|r| &r.text == word).count();
            if spelled == 0 {
                issues.push(LintIssue::UnplacedTarget { word: word.clone() });
            } else if targets > spelled {
                issues.push(LintIssue::MoreTargetsThanRuns {
                    word: word.clone(),
                    targets,
                    runs: spelled,
                });
            }
            if solver::trace_for_word(&self.letters, word).is_none() {
                issues.push(LintIssue::UnformableTarget { word: word.clone() });
            }
        }
        issues
    }
}

/// Ordered, read-only collection of levels, addressed from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStore {
    levels: Vec<LevelDefinition>,
    /// Identifier each level is written under, parallel to `levels`.
    keys: Vec<String>,
}

impl LevelStore {
    /// Build a store from levels in play order.
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        for (i, level) in levels.iter().enumerate() {
            if level.letters.is_empty() {
                return Err(LevelError::NoLetters { index: i + 1 });
            }
            if level.target_words.is_empty() {
                return Err(LevelError::NoTargets { index: i + 1 });
            }
        }
        let keys = (1..=levels.len()).map(level_id).collect();
        Ok(Self { levels, keys })
    }

    /// The levels shipped with the game.
    pub fn builtin() -> Self {
        Self {
            levels: BUILTIN_LEVELS
                .iter()
                .map(LevelDefinition::from_template)
                .collect(),
            keys: (1..=BUILTIN_LEVELS.len()).map(level_id).collect(),
        }
    }

    /// Definition for the 1-based `index`.
    pub fn get(&self, index: usize) -> Result<&LevelDefinition, LevelError> {
        index
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .ok_or(LevelError::NotFound { index })
    }

    pub fn count(&self) -> usize {
        self.levels.len()
    }

    /// `(index, definition)` pairs in play order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &LevelDefinition)> {
        self.levels.iter().enumerate().map(|(i, l)| (i + 1, l))
    }

    /// Lint every level, tagging each issue with its level index.
    pub fn lint(&self) -> Vec<(usize, LintIssue)> {
        self.iter()
            .flat_map(|(index, level)| level.lint().into_iter().map(move |issue| (index, issue)))
            .collect()
    }
}

/// Parse a level key: `level7` or `7`.
pub fn parse_level_id(key: &str) -> Result<usize, LevelError> {
    key.strip_prefix("level")
        .unwrap_or(key)
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| LevelError::BadIdentifier(key.to_string()))
}

/// Key given to level `index` when none was authored.
pub fn level_id(index: usize) -> String {
    format!("level{}", index)
}

#[cfg(feature = "std")]
mod json {
    use super::*;
    use anyhow::Context;
    use std::collections::BTreeMap;
    use std::path::Path;

    impl LevelStore {
        /// Load a store from a JSON object keyed by level identifier.
        pub fn from_json(json: &str) -> anyhow::Result<Self> {
            let raw: BTreeMap<String, LevelDefinition> =
                serde_json::from_str(json).context("level file is not a valid level map")?;
            let mut numbered = raw
                .into_iter()
                .map(|(key, level)| Ok((parse_level_id(&key)?, key, level)))
                .collect::<Result<Vec<_>, LevelError>>()?;
            numbered.sort_by_key(|(n, _, _)| *n);
            for (i, (n, _, _)) in numbered.iter().enumerate() {
                let expected = i + 1;
                if *n < expected {
                    return Err(LevelError::Duplicate { index: *n }.into());
                }
                if *n != expected {
                    return Err(LevelError::Gap { expected }.into());
                }
            }
            let (keys, levels): (Vec<String>, Vec<LevelDefinition>) =
                numbered.into_iter().map(|(_, key, level)| (key, level)).unzip();
            let mut store = Self::new(levels)?;
            store.keys = keys;
            Ok(store)
        }

        /// Read and parse a JSON level file.
        pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading level file {}", path.display()))?;
            Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
        }

        /// Serialize to the same keyed form `from_json` reads, under the
        /// keys the levels were loaded with.
        pub fn to_json(&self) -> anyhow::Result<String> {
            let map: BTreeMap<&str, &LevelDefinition> = self
                .keys
                .iter()
                .map(String::as_str)
                .zip(self.levels.iter())
                .collect();
            Ok(serde_json::to_string_pretty(&map)?)
        }
    }
}
