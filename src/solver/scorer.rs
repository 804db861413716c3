//! Frequency-based letter scoring

use super::frequency::FrequencyTable;

/// Scores letters by how common they are and picks the best one
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LetterScorer {
    table: FrequencyTable,
}

impl LetterScorer {
    #[must_use]
    pub const fn new(table: FrequencyTable) -> Self {
        Self { table }
    }

    /// Frequency score of a single letter
    #[inline]
    #[must_use]
    pub fn score(&self, letter: u8) -> f64 {
        self.table.frequency(letter)
    }

    /// The highest scoring candidate
    ///
    /// Ties go to the candidate that appears first. Returns `None` if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::solver::LetterScorer;
    ///
    /// let scorer = LetterScorer::default();
    /// assert_eq!(scorer.best_letter(b"zqtx"), Some(b't'));
    /// assert_eq!(scorer.best_letter(b""), None);
    /// ```
    #[must_use]
    pub fn best_letter(&self, candidates: &[u8]) -> Option<u8> {
        let (&first, rest) = candidates.split_first()?;
        let (best, _) = rest
            .iter()
            .fold((first, self.score(first)), |(best, best_score), &letter| {
                let score = self.score(letter);
                if score > best_score {
                    (letter, score)
                } else {
                    (best, best_score)
                }
            });
        Some(best)
    }

    /// Candidates paired with their scores, best first
    ///
    /// The sort is stable, so equal scores keep their input order.
    #[must_use]
    pub fn rank(&self, candidates: &[u8]) -> Vec<(u8, f64)> {
        let mut scored: Vec<(u8, f64)> = candidates
            .iter()
            .map(|&letter| (letter, self.score(letter)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
    }
}
