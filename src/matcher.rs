//! Pure resolution of a candidate word against a grid's runs.
//!
//! Nothing here mutates a session: `resolve` only decides what a finished
//! gesture means, and `MatchEngine` applies that decision.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{MatchPolicy, MIN_WORD_LEN};
use crate::grid::Run;

/// What a candidate word resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The word spells run `run`. `fresh` is false when every run spelling
    /// the word has already been traced.
    Run { run: usize, fresh: bool },
    /// The word is an outstanding target but no run spells it.
    Target,
    /// Nothing to do.
    Miss,
}

/// Resolve `candidate` (already lowercased) against `runs`.
///
/// Runs are scanned in the order given (rows, then columns); the first run
/// not yet in `claimed` wins. `claimed[i]` marks run `i` as traced. Whether
/// the word also leaves `remaining` is up to the caller.
pub fn resolve(
    runs: &[Run],
    claimed: &[bool],
    remaining: &[String],
    candidate: &str,
    policy: MatchPolicy,
) -> Resolution {
    if candidate.chars().count() < MIN_WORD_LEN {
        return Resolution::Miss;
    }

    let mut first_seen = None;
    for (i, run) in runs.iter().enumerate() {
        if run.text != candidate {
            continue;
        }
        if !claimed.get(i).copied().unwrap_or(false) {
            return Resolution::Run { run: i, fresh: true };
        }
        first_seen.get_or_insert(i);
    }
    if let Some(run) = first_seen {
        return Resolution::Run { run, fresh: false };
    }

    if policy.acknowledge_unplaced_targets && remaining.iter().any(|w| w == candidate) {
        Resolution::Target
    } else {
        Resolution::Miss
    }
}

/// Remove one occurrence of `word` from `remaining`. Returns whether it was there.
pub fn take_word(remaining: &mut Vec<String>, word: &str) -> bool {
    match remaining.iter().position(|w| w == word) {
        Some(pos) => {
            remaining.remove(pos);
            true
        }
        None => false,
    }
}
