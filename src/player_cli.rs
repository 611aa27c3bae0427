#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    common::GestureOutcome,
    game::SessionView,
    player::{Command, Player},
    render, solver,
};

/// Interactive player reading gestures from a line-based input.
///
/// A line is either a word to trace, tile indices (`0123` or `0 1 2 3`),
/// `:shuffle`, or `:quit`.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::from_reader(Box::new(io::BufReader::new(io::stdin())))
    }

    pub fn from_reader(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse tile indices: either one digit per character or whitespace-separated.
pub fn parse_tiles(line: &str) -> Option<Vec<usize>> {
    if line.split_whitespace().count() > 1 {
        return line.split_whitespace().map(|p| p.parse().ok()).collect();
    }
    if !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()) {
        return line
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect();
    }
    None
}

/// Turn one input line into a command, or an error message to show.
pub fn parse_command(line: &str, tiles: &[char]) -> Result<Command, String> {
    match line {
        ":quit" | ":q" => return Ok(Command::Stop),
        ":shuffle" | ":s" => return Ok(Command::Shuffle),
        _ => {}
    }
    if let Some(trace) = parse_tiles(line) {
        return match trace.iter().find(|&&t| t >= tiles.len()) {
            Some(bad) => Err(format!("No tile {} (tiles are 0..{})", bad, tiles.len())),
            None => Ok(Command::Trace(trace)),
        };
    }
    solver::trace_for_word(tiles, line)
        .map(Command::Trace)
        .ok_or_else(|| format!("Can't spell {:?} with these tiles", line))
}

impl Player for CliPlayer {
    fn next_command(&mut self, _rng: &mut SmallRng, view: &SessionView) -> Command {
        render::print_view(view);
        loop {
            print!("trace> ");
            if io::stdout().flush().is_err() {
                return Command::Stop;
            }
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Command::Stop,
                Ok(_) => {}
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_command(line, &view.tiles) {
                Ok(cmd) => return cmd,
                Err(msg) => println!("{}", msg),
            }
        }
    }

    fn handle_outcome(&mut self, outcome: &GestureOutcome) {
        match outcome {
            GestureOutcome::Match {
                word,
                newly_found: true,
                ..
            } => println!("Found {:?}!", word),
            GestureOutcome::Match { word, .. } => {
                println!("{:?} is on the board but not on your list", word)
            }
            GestureOutcome::Acknowledged { word } => println!("{:?} counts, but it's not in the grid", word),
            GestureOutcome::NoMatch { word } => println!("{:?} is not in the grid", word),
            GestureOutcome::LevelComplete {
                word,
                completed_level,
                next_level,
                ..
            } => println!(
                "Found {:?}! Level {} complete, on to level {}",
                word, completed_level, next_level
            ),
            GestureOutcome::NoMoreLevels { word, .. } => {
                println!("Found {:?}! That was the last level.", word)
            }
        }
    }
}
