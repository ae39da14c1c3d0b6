//! Data types matching the puzzle JSON interchange format.
//!
//! Every interchange struct here derives Serialize + Deserialize so it
//! can round-trip through the JSON boundary. Placement coordinates are
//! 0-based and camelCase on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

// -- Directions ----------------------------------------------------

/// One of the 8 compass directions a word can be read in.
///
/// Declaration order is the fixed tie-break order used by
/// [`crate::verify::locate_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// Unit step as (row delta, col delta). Row 0 is the top row, so
    /// South is +1 in rows and East is +1 in columns.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Recover a direction from coordinate deltas by their signs.
    /// Returns None for a zero delta, which implies no direction.
    pub fn from_deltas(d_row: isize, d_col: isize) -> Option<Direction> {
        match (d_row.signum(), d_col.signum()) {
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            (1, 0) => Some(Direction::South),
            (-1, 0) => Some(Direction::North),
            (1, 1) => Some(Direction::SouthEast),
            (1, -1) => Some(Direction::SouthWest),
            (-1, 1) => Some(Direction::NorthEast),
            (-1, -1) => Some(Direction::NorthWest),
            _ => None,
        }
    }
}

// -- Grid ----------------------------------------------------------

/// Immutable letter grid, addressed as (row, col) from the top-left.
///
/// Serializes as an array of rows, each an array of single-character
/// strings, which is the shape the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(Vec<Vec<char>>);

impl Grid {
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Grid(rows)
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Letter at (row, col), or None when the coordinate lies outside
    /// the grid. Ragged input rows are treated as short rows, never a
    /// panic, so foreign grid data is safe to probe.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn as_rows(&self) -> &[Vec<char>] {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for (i, ch) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

// -- Placements ----------------------------------------------------

/// Where one word's letters sit in the grid. The direction is implied
/// by the signs of (end - start); the step count is word length - 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Placement {
    /// The implied reading direction, None when start == end (a
    /// single-letter word, or malformed coordinates).
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_deltas(
            self.end_row as isize - self.start_row as isize,
            self.end_col as isize - self.start_col as isize,
        )
    }
}

// -- Engine I/O ----------------------------------------------------

fn default_max_attempts() -> u32 {
    200
}

fn default_fill_floor() -> f64 {
    1.0
}

fn default_alphabet() -> String {
    ('A'..='Z').collect()
}

/// Tunable generation constants. All fields default sensibly, so the
/// struct can be omitted from params entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Randomized placement trials per word before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Uniform weight added to every alphabet letter when drawing
    /// decoys, keeping the whole alphabet drawable.
    #[serde(default = "default_fill_floor")]
    pub fill_floor: f64,

    /// Decoy alphabet. Letters occurring in the puzzle words are
    /// always drawable on top of this set.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_attempts: 200,
            fill_floor: 1.0,
            alphabet: ('A'..='Z').collect(),
        }
    }
}

/// A puzzle generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleParams {
    /// Words to hide, case-insensitive, letters-only, no duplicates.
    pub words: Vec<String>,
    pub rows: usize,
    pub cols: usize,
    /// Seed for reproducible output. Absent means OS entropy, with no
    /// reproducibility guarantee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning: Option<Tuning>,
}

impl PuzzleParams {
    pub fn tuning(&self) -> Tuning {
        self.tuning.clone().unwrap_or_default()
    }
}

/// A finished puzzle: the filled grid plus one placement per input
/// word, in input order. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResult {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

// -- Tests ---------------------------------------------------------
