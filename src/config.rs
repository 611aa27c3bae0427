use crate::bitboard::BitBoard;

/// Side length of the letter grid.
pub const GRID_SIZE: usize = 4;
/// Number of cells in the letter grid, row-major.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;
/// Marker for a grid cell that holds no tile.
pub const BLANK: char = ' ';
/// Shortest candidate word that can ever match a run.
pub const MIN_WORD_LEN: usize = 2;

/// Reveal mask over the 4×4 grid.
pub type RevealMask = BitBoard<u16, GRID_SIZE>;

/// Authored shape of one built-in level.
#[derive(Debug, Clone, Copy)]
pub struct LevelTemplate {
    pub letters: &'static [char],
    pub target_words: &'static [&'static str],
    pub grid: [char; GRID_CELLS],
}

pub const NUM_BUILTIN_LEVELS: usize = 3;

/// Levels shipped with the game. Adding an entry here is all it takes to
/// extend the campaign; the grid and offered letters come straight from it.
pub const BUILTIN_LEVELS: [LevelTemplate; NUM_BUILTIN_LEVELS] = [
    LevelTemplate {
        letters: &['G', 'O', 'L', 'D'],
        target_words: &["dog", "gold", "god", "log"],
        grid: [
            'G', 'O', 'L', 'D', //
            'O', ' ', 'O', ' ', //
            'D', 'O', 'G', ' ', //
            ' ', ' ', ' ', ' ',
        ],
    },
    LevelTemplate {
        letters: &['K', 'O', 'U', 'Ş'],
        target_words: &["kuş", "koş", "şok", "koşu"],
        grid: [
            ' ', 'K', 'O', 'Ş', //
            ' ', 'O', ' ', 'O', //
            ' ', 'Ş', ' ', 'K', //
            'K', 'U', 'Ş', ' ',
        ],
    },
    LevelTemplate {
        letters: &['X', 'X', 'X', 'X'],
        target_words: &["xxx", "xxx", "xxx", "xxx"],
        grid: [
            'X', ' ', 'O', 'Ş', //
            'Y', 'X', ' ', 'O', //
            ' ', ' ', 'X', 'K', //
            'K', ' ', ' ', 'X',
        ],
    },
];

/// How the engine treats a target word that no run spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchPolicy {
    /// Accept a traced target word even when no row or column spells it,
    /// crossing it off without revealing any cell.
    pub acknowledge_unplaced_targets: bool,
}

impl MatchPolicy {
    /// Only words spelled by a row or column run count.
    pub const fn strict() -> Self {
        Self {
            acknowledge_unplaced_targets: false,
        }
    }

    /// Target words count even when the grid does not spell them.
    pub const fn lenient() -> Self {
        Self {
            acknowledge_unplaced_targets: true,
        }
    }
}

/// Runtime settings for a `MatchEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub policy: MatchPolicy,
    /// 1-based level the engine starts on.
    pub start_level: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::strict(),
            start_level: 1,
        }
    }
}
