//! The 4×4 letter grid and its row/column runs.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;
use crate::config::{BLANK, GRID_CELLS, GRID_SIZE, MIN_WORD_LEN};

/// Reading direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One grid cell: a letter tile or a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "char", into = "char")
)]
pub enum Cell {
    #[default]
    Blank,
    Letter(char),
}

impl Cell {
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Blank => None,
            Cell::Letter(c) => Some(c),
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        if c == BLANK {
            Cell::Blank
        } else {
            Cell::Letter(c)
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        cell.letter().unwrap_or(BLANK)
    }
}

/// Lowercase a word the way traced letters and run strings are compared.
pub fn normalize(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// A maximal stretch of non-blank cells along one row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub orientation: Orientation,
    /// Row index for horizontal runs, column index for vertical ones.
    pub line: usize,
    /// Lowercased letters of the run.
    pub text: String,
    /// Row-major cell indices, in reading order.
    pub cells: Vec<usize>,
}

/// Row-major 4×4 letter grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Cell>", into = "Vec<Cell>")
)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    pub const fn new(cells: [Cell; GRID_CELLS]) -> Self {
        Self { cells }
    }

    /// Build from authored characters; `' '` marks a hole.
    pub fn from_chars(chars: [char; GRID_CELLS]) -> Self {
        Self {
            cells: chars.map(Cell::from),
        }
    }

    /// Parse a 16-character string, row-major.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        s.chars().map(Cell::from).collect::<Vec<_>>().try_into()
    }

    pub fn cells(&self) -> &[Cell; GRID_CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        self.cell(row * GRID_SIZE + col)
    }

    /// Indices of all non-blank cells.
    pub fn tile_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_blank())
            .map(|(i, _)| i)
    }

    /// Every run long enough to be a word: rows top to bottom, then columns
    /// left to right. Single cells are not words and are left out.
    pub fn runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for line in 0..GRID_SIZE {
                self.collect_line(orientation, line, &mut runs);
            }
        }
        runs
    }

    fn collect_line(&self, orientation: Orientation, line: usize, runs: &mut Vec<Run>) {
        let mut current: Vec<usize> = Vec::new();
        for k in 0..GRID_SIZE {
            let index = match orientation {
                Orientation::Horizontal => line * GRID_SIZE + k,
                Orientation::Vertical => k * GRID_SIZE + line,
            };
            if self.cells[index].is_blank() {
                self.flush_run(orientation, line, &mut current, runs);
            } else {
                current.push(index);
            }
        }
        self.flush_run(orientation, line, &mut current, runs);
    }

    fn flush_run(
        &self,
        orientation: Orientation,
        line: usize,
        current: &mut Vec<usize>,
        runs: &mut Vec<Run>,
    ) {
        if current.len() >= MIN_WORD_LEN {
            let cells = core::mem::take(current);
            let text = cells
                .iter()
                .filter_map(|&i| self.cells[i].letter())
                .flat_map(char::to_lowercase)
                .collect();
            runs.push(Run {
                orientation,
                line,
                text,
                cells,
            });
        } else {
            current.clear();
        }
    }
}

impl TryFrom<Vec<Cell>> for Grid {
    type Error = GridError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        let found = cells.len();
        let cells: [Cell; GRID_CELLS] = cells
            .try_into()
            .map_err(|_| GridError::WrongCellCount { found })?;
        Ok(Self { cells })
    }
}

impl From<Grid> for Vec<Cell> {
    fn from(grid: Grid) -> Self {
        grid.cells.to_vec()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new([Cell::Blank; GRID_CELLS])
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let ch = self.cells[r * GRID_SIZE + c].letter().unwrap_or('_');
                write!(f, "{} ", ch)?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
