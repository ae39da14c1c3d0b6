//! Post-hoc verification of puzzle data.
//!
//! These functions only read a finished grid; they never mutate and
//! never fail fatally. Callers use them to validate or repair solution
//! records coming from an untrusted or foreign source, where
//! coordinates may be wrong, reversed, or out of bounds.

use crate::placement::span_end;
use crate::types::{Direction, Grid, Placement};

/// Outcome of checking a claimed placement against a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The letters along the span read exactly the word.
    Verified,
    /// The letters read the word end-to-start. Solution records with
    /// swapped endpoints are common in foreign data and still usable.
    VerifiedReversed,
    /// The span leaves the grid.
    OutOfBounds,
    /// The span is in bounds but the letters disagree.
    Mismatch { found: String },
}

/// Read the letters a placement claims, walking one word length from
/// the start cell along the direction implied by the coordinate signs.
///
/// Returns None, with no partial result, if any visited coordinate
/// lies outside the grid, or if no direction is implied (start equals
/// end on a multi-letter word).
pub fn extract_word(grid: &Grid, placement: &Placement) -> Option<String> {
    let len = placement.word.chars().count();
    if len == 0 {
        return None;
    }
    let (dr, dc) = match placement.direction() {
        Some(dir) => dir.step(),
        None if len == 1 => (0, 0),
        None => return None,
    };

    let mut out = String::with_capacity(len);
    let (mut r, mut c) = (placement.start_row as isize, placement.start_col as isize);
    for _ in 0..len {
        out.push(cell_at(grid, r, c)?);
        r += dr;
        c += dc;
    }
    Some(out)
}

/// Exhaustively search the grid for a word: row-major cell scan, the 8
/// directions probed in declaration order at each cell. The first full
/// match wins, making the result deterministic for a given grid.
/// Case-insensitive; the returned placement carries the uppercased
/// word and is guaranteed to extract back to it.
pub fn locate_word(grid: &Grid, word: &str) -> Option<Placement> {
    let target: Vec<char> = word.to_uppercase().chars().collect();
    if target.is_empty() {
        return None;
    }

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            // Ragged foreign rows can leave holes; skip, don't abort.
            let first = match grid.get(row, col) {
                Some(ch) => ch,
                None => continue,
            };
            if !letter_eq(first, target[0]) {
                continue;
            }
            for dir in Direction::ALL {
                if run_matches(grid, row, col, dir, &target) {
                    let (end_row, end_col) = span_end(row, col, dir, target.len());
                    return Some(Placement {
                        word: target.iter().collect(),
                        start_row: row,
                        start_col: col,
                        end_row: end_row as usize,
                        end_col: end_col as usize,
                    });
                }
            }
        }
    }
    None
}

/// Classify a claimed placement: does the grid actually spell the word
/// there? Reads forward first, then backward, so records with swapped
/// endpoints are still recognized.
pub fn verify_placement(grid: &Grid, placement: &Placement) -> Verification {
    let found = match extract_word(grid, placement) {
        Some(found) => found,
        None => return Verification::OutOfBounds,
    };

    let want: Vec<char> = placement.word.to_uppercase().chars().collect();
    let got: Vec<char> = found.to_uppercase().chars().collect();
    if got == want {
        Verification::Verified
    } else if got.iter().rev().eq(want.iter()) {
        Verification::VerifiedReversed
    } else {
        Verification::Mismatch { found }
    }
}

fn cell_at(grid: &Grid, row: isize, col: isize) -> Option<char> {
    if row < 0 || col < 0 {
        return None;
    }
    grid.get(row as usize, col as usize)
}

fn run_matches(grid: &Grid, row: usize, col: usize, dir: Direction, target: &[char]) -> bool {
    let (dr, dc) = dir.step();
    let (mut r, mut c) = (row as isize, col as isize);
    for &ch in target {
        match cell_at(grid, r, c) {
            Some(found) if letter_eq(found, ch) => {}
            _ => return false,
        }
        r += dr;
        c += dc;
    }
    true
}

/// Case-insensitive single-letter comparison. Uppercasing goes through
/// the full Unicode mapping so letters like 'ñ' compare equal to 'Ñ'.
fn letter_eq(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}

// -- Tests ---------------------------------------------------------
