//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .symbols()
        .into_iter()
        .map(|symbol| match symbol {
            Feedback::Absent => '⬜',
            Feedback::Present => '🟨',
            Feedback::Hit => '🟩',
        })
        .collect()
}

/// English ordinal of a positive number: 1st, 2nd, 3rd, 4th, 11th, 21st
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Truncation is intended; the result is clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the best possible split of `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_mixed() {
        let pattern = Pattern::parse("gyxxg").unwrap();
        assert_eq!(pattern_to_emoji(pattern), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(Pattern::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn ordinals() {
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            rendered,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st", "111th"]
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn entropy_bar_scales_to_candidates() {
        assert_eq!(entropy_bar(2.0, 4, 4), "████");
        assert_eq!(entropy_bar(0.0, 1, 4), "░░░░");
    }
}
