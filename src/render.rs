#![cfg(feature = "std")]

//! Plain-text rendering of a session for terminal play.

use std::fmt::Write as _;

use crate::config::GRID_SIZE;
use crate::game::SessionView;

/// The grid: revealed letters, `□` for hidden tiles, `·` for holes.
pub fn render_grid(view: &SessionView) -> String {
    let mut out = String::new();
    for row in view.cells.chunks(GRID_SIZE) {
        out.push_str("  ");
        for cell in row {
            let ch = match cell.letter {
                None => '·',
                Some(letter) if cell.revealed => letter,
                Some(_) => '□',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// The offered tiles with their indices, marking traced ones.
pub fn render_tiles(view: &SessionView) -> String {
    let mut out = String::from("Tiles:");
    for (i, letter) in view.tiles.iter().enumerate() {
        if view.trace.contains(&i) {
            let _ = write!(out, "  [{}]*{}", i, letter);
        } else {
            let _ = write!(out, "  [{}] {}", i, letter);
        }
    }
    out
}

/// Everything the player sees between gestures.
pub fn render_view(view: &SessionView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Level {}  ({} words left)",
        view.level,
        view.remaining_words.len()
    );
    out.push_str(&render_grid(view));
    out.push_str(&render_tiles(view));
    out.push('\n');
    if !view.current_word.is_empty() {
        let _ = writeln!(out, "Tracing: {}", view.current_word);
    }
    out
}

/// Print the view to stdout.
pub fn print_view(view: &SessionView) {
    println!();
    print!("{}", render_view(view));
}
