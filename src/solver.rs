//! Tile search for automated play and level linting.
//!
//! Finds which offered tiles spell a word, using each tile at most once.

use alloc::string::String;
use alloc::vec::Vec;

use crate::grid::{normalize, Run};

/// Find tile indices whose letters, in order, spell `word` (case-insensitive).
/// No tile is used twice. Returns `None` when the tiles cannot spell it.
pub fn trace_for_word(tiles: &[char], word: &str) -> Option<Vec<usize>> {
    let word = normalize(word);
    if word.is_empty() {
        return None;
    }
    let lowered: Vec<String> = tiles
        .iter()
        .map(|c| c.to_lowercase().collect())
        .collect();
    let mut used = alloc::vec![false; tiles.len()];
    let mut path = Vec::with_capacity(tiles.len());
    if search(&lowered, &word, &mut used, &mut path) {
        Some(path)
    } else {
        None
    }
}

// A lowercased tile can expand to several chars, so match by prefix and
// backtrack when a choice leads nowhere.
fn search(tiles: &[String], rest: &str, used: &mut [bool], path: &mut Vec<usize>) -> bool {
    if rest.is_empty() {
        return true;
    }
    for (i, tile) in tiles.iter().enumerate() {
        if used[i] || tile.is_empty() || !rest.starts_with(tile.as_str()) {
            continue;
        }
        used[i] = true;
        path.push(i);
        if search(tiles, &rest[tile.len()..], used, path) {
            return true;
        }
        path.pop();
        used[i] = false;
    }
    false
}

/// Indices of the runs the offered tiles can spell.
pub fn traceable_runs(tiles: &[char], runs: &[Run]) -> Vec<usize> {
    runs.iter()
        .enumerate()
        .filter(|(_, run)| trace_for_word(tiles, &run.text).is_some())
        .map(|(i, _)| i)
        .collect()
}

/// The letters a trace spells, lowercased.
pub fn spell(tiles: &[char], trace: &[usize]) -> String {
    trace
        .iter()
        .filter_map(|&i| tiles.get(i))
        .flat_map(|c| c.to_lowercase())
        .collect()
}
