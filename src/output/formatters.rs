//! Formatting utilities for terminal output

use crate::game::MAX_ATTEMPTS;

/// Remaining lives as filled and empty pips, e.g. `●●●●●●○○`
#[must_use]
pub fn attempts_meter(attempts_remaining: usize) -> String {
    let remaining = attempts_remaining.min(MAX_ATTEMPTS);
    format!(
        "{}{}",
        "●".repeat(remaining),
        "○".repeat(MAX_ATTEMPTS - remaining)
    )
}

/// Letters as a comma separated list, e.g. `e, t, a`
#[must_use]
pub fn letter_list(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&l| char::from(l).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_full_and_empty() {
        assert_eq!(attempts_meter(MAX_ATTEMPTS), "●".repeat(MAX_ATTEMPTS));
        assert_eq!(attempts_meter(0), "○".repeat(MAX_ATTEMPTS));
    }

    #[test]
    fn meter_partial() {
        assert_eq!(attempts_meter(6), "●●●●●●○○");
    }

    #[test]
    fn letter_list_joins() {
        assert_eq!(letter_list(b"eta"), "e, t, a");
        assert_eq!(letter_list(b""), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
    }
}
