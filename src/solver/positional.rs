//! Positional search
//!
//! A bisection-shaped scan over the alphabetically sorted candidates. Each probe
//! either hits a letter of the word or is compared with the word's first letter
//! to decide which half to keep.
//!
//! This is a heuristic, not a binary search: the word is not a sorted search
//! space and only its first letter steers the window. The bisection just bounds
//! the number of probes to `log2(candidates)`. When no probe hits, the first
//! candidate is returned as a weak default.

use crate::core::{GuessedLetters, SecretWord};
use tracing::trace;

/// Scan `candidates` (sorted ascending) for a letter worth guessing
///
/// Returns `None` only when `candidates` is empty.
///
/// If a probe lands on a letter that was already guessed, the scan stops and
/// returns its neighbour: `mid + 1` while that is inside the window, otherwise
/// `mid - 1`, wrapping to the last candidate at index 0.
///
/// # Examples
/// ```
/// use hangman_ai::core::{GuessedLetters, SecretWord};
/// use hangman_ai::solver::positional_search;
///
/// let word = SecretWord::new("cat").unwrap();
/// let guessed = GuessedLetters::new();
/// assert_eq!(positional_search(&word, &guessed, &guessed.candidates()), Some(b'c'));
/// ```
#[must_use]
pub fn positional_search(
    word: &SecretWord,
    guessed: &GuessedLetters,
    candidates: &[u8],
) -> Option<u8> {
    let mut left = 0;
    let mut right = candidates.len().checked_sub(1)?;
    let anchor = word.first_letter();

    while left <= right {
        let mid = (left + right) / 2;
        let probe = candidates[mid];
        trace!(left, right, probe = %char::from(probe), "positional probe");

        if guessed.contains(probe) {
            return Some(neighbour(candidates, mid, right));
        }

        if word.has_letter(probe) {
            return Some(probe);
        }

        if probe < anchor {
            left = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            right = mid - 1;
        }
    }

    candidates.first().copied()
}

fn neighbour(candidates: &[u8], mid: usize, right: usize) -> u8 {
    if mid < right {
        candidates[mid + 1]
    } else {
        mid.checked_sub(1)
            .map_or(candidates[candidates.len() - 1], |i| candidates[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(word: &str, guessed: &str) -> Option<u8> {
        let guessed = GuessedLetters::parse(guessed).unwrap();
        positional_search(&SecretWord::new(word).unwrap(), &guessed, &guessed.candidates())
    }

    #[test]
    fn finds_first_letter_when_nothing_else_hits() {
        // probes m, f, then c
        assert_eq!(search("cat", ""), Some(b'c'));
    }

    #[test]
    fn moves_right_when_probe_precedes_first_letter() {
        // probes n, t, w, y, then z
        assert_eq!(search("zoo", "e"), Some(b'z'));
    }

    #[test]
    fn returns_any_letter_of_the_word_it_lands_on() {
        // first probe (index 11 of 24 candidates) is 'n'
        assert_eq!(search("none", "ae"), Some(b'n'));
    }

    #[test]
    fn exhaustion_falls_back_to_first_candidate() {
        // 'c' is gone, probes n, g, d, a, b all miss
        assert_eq!(search("cow", "c"), Some(b'a'));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let word = SecretWord::new("cat").unwrap();
        assert_eq!(positional_search(&word, &GuessedLetters::new(), &[]), None);
    }

    #[test]
    fn guessed_probe_steps_to_next_neighbour() {
        let word = SecretWord::new("xyz").unwrap();
        let guessed = GuessedLetters::parse("b").unwrap();
        assert_eq!(positional_search(&word, &guessed, b"abc"), Some(b'c'));
    }

    #[test]
    fn guessed_probe_at_window_edge_steps_back() {
        let word = SecretWord::new("zzz").unwrap();
        let guessed = GuessedLetters::parse("c").unwrap();
        // probes b (miss, b < z), then c which is guessed with no room to the right
        assert_eq!(positional_search(&word, &guessed, b"abc"), Some(b'b'));
    }

    #[test]
    fn guessed_probe_at_index_zero_wraps() {
        let word = SecretWord::new("zzz").unwrap();
        let guessed = GuessedLetters::parse("a").unwrap();
        assert_eq!(positional_search(&word, &guessed, b"a"), Some(b'a'));
    }

    #[test]
    fn result_is_always_a_candidate() {
        for word in ["hangman", "quiz", "jazz", "be", "oxygen"] {
            for guessed in ["", "e", "ta", "zyx"] {
                let g = GuessedLetters::parse(guessed).unwrap();
                let candidates = g.candidates();
                let pick = positional_search(&SecretWord::new(word).unwrap(), &g, &candidates)
                    .unwrap();
                assert!(candidates.contains(&pick));
            }
        }
    }
}
