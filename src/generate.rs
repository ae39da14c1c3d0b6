//! Word-search puzzle generation.
//!
//! Places every requested word on the grid with randomized, bounded
//! retries, then hands the remaining cells to the decoy fill. All
//! randomness comes from one RNG seeded per call, so the same params
//! and seed always reproduce the same puzzle.

use std::collections::HashSet;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::GenerateError;
use crate::fill;
use crate::placement::{feasible_starts, fits_any_direction, span_end, DraftGrid};
use crate::types::{Direction, Placement, PuzzleParams, PuzzleResult, Tuning};

/// Build a puzzle for `params`: every word placed along one of the 8
/// directions, crossings preferred, all leftover cells filled with
/// biased decoys. Fails without a partial grid if the input is invalid
/// or the trial budget runs out.
pub fn generate(params: &PuzzleParams) -> Result<PuzzleResult, GenerateError> {
    let words = validate_words(&params.words, params.rows, params.cols)?;
    let tuning = params.tuning();

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Longest first; equal lengths keep input order (stable sort).
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(words[i].chars().count()));

    let mut draft = DraftGrid::new(params.rows, params.cols);
    let mut placements: Vec<Option<Placement>> = vec![None; words.len()];
    let mut any_placed = false;

    for &i in &order {
        let placed = place_word(&mut draft, &words[i], any_placed, &tuning, &mut rng)?;
        debug!(
            "placed {:?} at ({}, {}) -> ({}, {})",
            placed.word, placed.start_row, placed.start_col, placed.end_row, placed.end_col
        );
        placements[i] = Some(placed);
        any_placed = true;
    }

    let grid = fill::complete(draft, &words, &tuning, &mut rng);

    Ok(PuzzleResult {
        grid,
        placements: placements.into_iter().flatten().collect(),
    })
}

/// Normalize to uppercase and reject bad input up front: empty or
/// non-letter words, case-insensitive duplicates, and words no
/// direction can fit. Nothing is placed until the whole list passes.
fn validate_words(
    raw: &[String],
    rows: usize,
    cols: usize,
) -> Result<Vec<String>, GenerateError> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut words = Vec::with_capacity(raw.len());

    for word in raw {
        let norm = word.to_uppercase();
        if norm.is_empty() || norm.chars().any(|ch| !ch.is_alphabetic()) {
            return Err(GenerateError::InvalidWord { word: word.clone() });
        }
        let len = norm.chars().count();
        if !fits_any_direction(len, rows, cols) {
            return Err(GenerateError::WordTooLong {
                word: word.clone(),
                len,
                rows,
                cols,
            });
        }
        if !seen.insert(norm.clone()) {
            return Err(GenerateError::DuplicateWord { word: word.clone() });
        }
        words.push(norm);
    }
    Ok(words)
}

/// Place one word with up to `max_attempts` randomized trials: a
/// uniform direction, then a uniform start among the cells that keep
/// the span in bounds. A trial crossing an already-placed word commits
/// immediately; an isolated valid trial is kept as a fallback while
/// the budget lasts, so crossings win whenever the sampling finds one.
fn place_word(
    draft: &mut DraftGrid,
    word: &str,
    any_placed: bool,
    tuning: &Tuning,
    rng: &mut StdRng,
) -> Result<Placement, GenerateError> {
    let letters: Vec<char> = word.chars().collect();
    let mut fallback: Option<(usize, usize, Direction)> = None;

    for attempt in 0..tuning.max_attempts {
        let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let Some((row_range, col_range)) =
            feasible_starts(draft.rows(), draft.cols(), dir, letters.len())
        else {
            // The word is too long for this direction; the attempt is
            // still spent.
            continue;
        };
        let row = rng.random_range(row_range);
        let col = rng.random_range(col_range);

        match draft.try_fit(row, col, dir, &letters) {
            None => continue,
            Some(crossings) if crossings > 0 || !any_placed => {
                trace!("{word:?} fit on attempt {attempt} with {crossings} crossings");
                return Ok(commit(draft, word, &letters, row, col, dir));
            }
            Some(_) => {
                // Valid but isolated; keep hunting for a crossing.
                fallback.get_or_insert((row, col, dir));
            }
        }
    }

    match fallback {
        Some((row, col, dir)) => Ok(commit(draft, word, &letters, row, col, dir)),
        None => Err(GenerateError::Exhausted {
            word: word.to_string(),
            attempts: tuning.max_attempts,
        }),
    }
}

fn commit(
    draft: &mut DraftGrid,
    word: &str,
    letters: &[char],
    row: usize,
    col: usize,
    dir: Direction,
) -> Placement {
    draft.commit(row, col, dir, letters);
    // In bounds by construction, so the casts are exact.
    let (end_row, end_col) = span_end(row, col, dir, letters.len());
    Placement {
        word: word.to_string(),
        start_row: row,
        start_col: col,
        end_row: end_row as usize,
        end_col: end_col as usize,
    }
}

// -----------------------------------------------------------------
// Tests
// -----------------------------------------------------------------
