//! The fixed 26-letter alphabet
//!
//! Letters are stored as lowercase ASCII bytes throughout the crate.

/// Every guessable letter, in alphabetical order
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Index of a letter within [`ALPHABET`]
///
/// Returns `None` for anything that is not a lowercase ASCII letter.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_sorted_and_unique() {
        assert!(ALPHABET.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ALPHABET_LEN, 26);
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'a'), Some(0));
        assert_eq!(letter_index(b'z'), Some(25));
        assert_eq!(letter_index(b'A'), None);
        assert_eq!(letter_index(b'1'), None);
    }
}
