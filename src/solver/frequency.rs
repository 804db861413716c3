//! Letter frequency model
//!
//! Relative occurrence of each letter in English prose, used as the prior for
//! every frequency-based decision.

use crate::core::alphabet::letter_index;

/// Per-letter weights indexed by alphabet position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable {
    weights: [f64; 26],
}

impl FrequencyTable {
    /// English letter frequencies (Wikipedia, "Letter frequency")
    pub const ENGLISH: Self = Self::new([
        0.08167, // a
        0.01492, // b
        0.02782, // c
        0.04253, // d
        0.12702, // e
        0.02228, // f
        0.02015, // g
        0.06094, // h
        0.06966, // i
        0.00153, // j
        0.00772, // k
        0.04025, // l
        0.02406, // m
        0.06749, // n
        0.07507, // o
        0.01929, // p
        0.00095, // q
        0.05987, // r
        0.06327, // s
        0.09056, // t
        0.02758, // u
        0.00978, // v
        0.02360, // w
        0.00150, // x
        0.01974, // y
        0.00074, // z
    ]);

    #[must_use]
    pub const fn new(weights: [f64; 26]) -> Self {
        Self { weights }
    }

    /// Frequency of a letter; 0.0 for anything outside the alphabet
    #[inline]
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        letter_index(letter).map_or(0.0, |index| self.weights[index])
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::ENGLISH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET;

    #[test]
    fn english_extremes() {
        let table = FrequencyTable::ENGLISH;
        assert!((table.frequency(b'e') - 0.12702).abs() < f64::EPSILON);
        assert!((table.frequency(b'z') - 0.00074).abs() < f64::EPSILON);
    }

    #[test]
    fn outside_alphabet_scores_zero() {
        let table = FrequencyTable::ENGLISH;
        assert!(table.frequency(b'E').abs() < f64::EPSILON);
        assert!(table.frequency(b'?').abs() < f64::EPSILON);
    }

    #[test]
    fn english_weights_sum_to_about_one() {
        let total: f64 = ALPHABET
            .iter()
            .map(|&l| FrequencyTable::ENGLISH.frequency(l))
            .sum();
        assert!((total - 1.0).abs() < 0.001, "sum was {total}");
    }
}
