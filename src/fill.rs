//! Decoy letters for the cells no word covers.
//!
//! Decoys are drawn from a distribution biased toward the letters the
//! placed words already use, so near-miss sequences appear all over
//! the grid instead of an obviously alien filler alphabet. Decoys may
//! accidentally spell extra words; that is acceptable noise and is
//! never checked for.

use std::collections::BTreeMap;

use rand::Rng;

use crate::placement::DraftGrid;
use crate::types::{Grid, Tuning};

/// Per-letter draw weights: occurrence count across the placed words
/// plus a uniform floor over the alphabet, so every alphabet letter
/// stays drawable. Letters the words contribute from outside the
/// alphabet are drawable too. Sorted by letter for deterministic
/// drawing order.
pub fn letter_weights(words: &[String], alphabet: &str, floor: f64) -> Vec<(char, f64)> {
    let mut weights: BTreeMap<char, f64> = alphabet.chars().map(|ch| (ch, floor)).collect();
    for word in words {
        for ch in word.chars() {
            *weights.entry(ch).or_insert(floor) += 1.0;
        }
    }
    weights.into_iter().collect()
}

/// Select an index with probability proportional to `weights`.
/// Returns None if the slice is empty or all weights are zero.
pub(crate) fn weighted_choice<R: Rng>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let r = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w;
        if r < cumulative {
            return Some(i);
        }
    }
    Some(weights.len() - 1)
}

/// Fill every unassigned cell of `draft` with a decoy letter drawn
/// independently from the word-biased distribution, and produce the
/// final grid.
pub fn complete<R: Rng>(draft: DraftGrid, words: &[String], tuning: &Tuning, rng: &mut R) -> Grid {
    let table = letter_weights(words, &tuning.alphabet, tuning.fill_floor);
    let weights: Vec<f64> = table.iter().map(|&(_, w)| w).collect();
    draft.into_grid(|| {
        match weighted_choice(rng, &weights) {
            Some(i) => table[i].0,
            // Empty alphabet, no words, or an all-zero distribution:
            // nothing to draw from, keep the grid total anyway.
            None => 'X',
        }
    })
}

// -- Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::placement::DraftGrid;

    #[test]
    fn weights_are_count_plus_floor() {
        let words = vec!["SOL".to_string(), "LUNA".to_string()];
        let table = letter_weights(&words, "ABCDEFGHIJKLMNOPQRSTUVWXYZ", 1.0);
        assert_eq!(table.len(), 26);

        let weight = |ch: char| table.iter().find(|&&(c, _)| c == ch).map(|&(_, w)| w);
        assert_eq!(weight('L'), Some(3.0)); // once per word, plus floor
        assert_eq!(weight('O'), Some(2.0));
        assert_eq!(weight('Z'), Some(1.0)); // floor only
    }

    #[test]
    fn words_extend_the_alphabet() {
        let words = vec!["AÑO".to_string()];
        let table = letter_weights(&words, "ABCDEFGHIJKLMNOPQRSTUVWXYZ", 1.0);
        assert_eq!(table.len(), 27);
        assert!(table.iter().any(|&(ch, w)| ch == 'Ñ' && w == 2.0));
    }

    #[test]
    fn weighted_choice_zero_weights() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_choice(&mut rng, &[]), None);
        assert_eq!(weighted_choice(&mut rng, &[0.0, 0.0]), None);
    }

    #[test]
    fn weighted_choice_respects_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let weights = [1.0, 0.0, 3.0];
        let mut hits = [0u32; 3];
        for _ in 0..2000 {
            hits[weighted_choice(&mut rng, &weights).unwrap()] += 1;
        }
        assert_eq!(hits[1], 0);
        assert!(hits[2] > hits[0]);
    }

    #[test]
    fn fill_biases_toward_word_letters() {
        // One word repeating a single letter; with a floor of 1.0 the
        // distribution is far from uniform, so the grid should hold
        // clearly more of that letter than of any floor-only letter.
        let words = vec!["MMMMMMMMMM".to_string()];
        let mut rng = StdRng::seed_from_u64(11);
        let grid = complete(
            DraftGrid::new(20, 20),
            &words,
            &Tuning::default(),
            &mut rng,
        );

        let count = |target: char| {
            grid.as_rows()
                .iter()
                .flatten()
                .filter(|&&ch| ch == target)
                .count()
        };
        assert!(count('M') > count('Q') * 2);
    }

    #[test]
    fn fill_only_touches_unassigned_cells() {
        let mut draft = DraftGrid::new(3, 3);
        draft.commit(1, 0, crate::types::Direction::East, &['S', 'O', 'L']);
        let mut rng = StdRng::seed_from_u64(3);
        let grid = complete(draft, &["SOL".to_string()], &Tuning::default(), &mut rng);

        assert_eq!(grid.get(1, 0), Some('S'));
        assert_eq!(grid.get(1, 1), Some('O'));
        assert_eq!(grid.get(1, 2), Some('L'));
        for row in grid.as_rows() {
            for &ch in row {
                assert!(ch.is_alphabetic());
            }
        }
    }
}
