//! Error types for puzzle generation.
//!
//! Every variant aborts the whole generation request; a partial or
//! inconsistent grid is never returned alongside an error.

use thiserror::Error;

/// Reasons a generation request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The word is empty or contains a non-letter character.
    #[error("invalid word {word:?}: words must be non-empty and letters-only")]
    InvalidWord { word: String },

    /// Two input words are equal ignoring case.
    #[error("duplicate word {word:?} in input list")]
    DuplicateWord { word: String },

    /// The word cannot fit the grid in any of the 8 directions:
    /// straight runs are bounded by the longer grid side, diagonal
    /// runs by the shorter one.
    #[error("word {word:?} ({len} letters) does not fit a {rows}x{cols} grid in any direction")]
    WordTooLong {
        word: String,
        len: usize,
        rows: usize,
        cols: usize,
    },

    /// The randomized trial budget ran out before a conflict-free
    /// position was found for the word. Retrying with a larger grid
    /// or another seed may succeed.
    #[error("no valid position found for {word:?} after {attempts} attempts")]
    Exhausted { word: String, attempts: u32 },
}
