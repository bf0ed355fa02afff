//! Guess scoring
//!
//! Scores a guess by the partition it induces over the live candidates.
//! One scoring call costs exactly one feedback computation per candidate.

mod partition;
mod policy;

pub use partition::{Partition, group_by_pattern};
pub use policy::{ScoringPolicy, shannon_entropy};

use crate::core::Word;

/// Score of a guess that is certain to win
pub const WIN_SCORE: f64 = f64::INFINITY;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum bucket size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback patterns
    pub buckets: usize,
}

impl GuessMetrics {
    /// Derive all metrics from one partition
    #[must_use]
    pub fn from_partition(partition: &Partition) -> Self {
        let total = partition.total() as f64;
        let sizes = partition.sizes();
        let expected_remaining = if total > 0.0 {
            sizes
                .iter()
                .map(|&c| f64::from(c) * f64::from(c) / total)
                .sum()
        } else {
            0.0
        };

        Self {
            entropy: shannon_entropy(&sizes),
            expected_remaining,
            max_partition: partition.largest() as usize,
            buckets: sizes.len(),
        }
    }
}

/// Scores guesses under a fixed policy
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessScorer {
    policy: ScoringPolicy,
}

impl GuessScorer {
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Score `guess` against the live candidates; higher is better
    ///
    /// A guess equal to the only remaining candidate is a certain win and
    /// scores `WIN_SCORE`.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::solver::{GuessScorer, ScoringPolicy};
    /// use wordle_engine::wordlists::loader::words_from_slice;
    ///
    /// let live = words_from_slice(&["slate", "irate"]).unwrap();
    /// let scorer = GuessScorer::new(ScoringPolicy::InformationGain);
    ///
    /// let score = scorer.score(&Word::new("slate").unwrap(), &live);
    /// assert!((score - 1.0).abs() < 1e-9); // a perfect binary split
    /// ```
    #[must_use]
    pub fn score(&self, guess: &Word, live: &[Word]) -> f64 {
        if let [only] = live
            && only == guess
        {
            return WIN_SCORE;
        }
        self.policy.reduce(&Partition::of(guess, live))
    }

    /// Full metrics for display
    #[must_use]
    pub fn metrics(&self, guess: &Word, live: &[Word]) -> GuessMetrics {
        GuessMetrics::from_partition(&Partition::of(guess, live))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn sole_candidate_is_a_certain_win() {
        let live = [word("crane")];
        for policy in [ScoringPolicy::InformationGain, ScoringPolicy::WorstCase] {
            let scorer = GuessScorer::new(policy);
            assert!(scorer.score(&word("crane"), &live).is_infinite());
            assert!(scorer.score(&word("slate"), &live).is_finite());
        }
    }

    #[test]
    fn diverse_guess_beats_repeated_letters() {
        let live = words_from_slice(&["slate", "irate", "crate", "grate"]).unwrap();
        let scorer = GuessScorer::default();
        assert!(scorer.score(&word("aeros"), &live) > scorer.score(&word("aaaaa"), &live));
    }

    #[test]
    fn worst_case_prefers_better_splits() {
        let live = words_from_slice(&["aaaaa", "bbbbb"]).unwrap();
        let scorer = GuessScorer::new(ScoringPolicy::WorstCase);
        assert!(scorer.score(&word("aaaaa"), &live) > scorer.score(&word("zzzzz"), &live));
    }

    #[test]
    fn metrics_are_consistent() {
        let live = words_from_slice(&["slate", "irate", "trace", "raise"]).unwrap();
        let metrics = GuessScorer::default().metrics(&word("crane"), &live);

        assert!(metrics.entropy > 1.0 && metrics.entropy <= 2.0);
        assert!(metrics.max_partition >= 1 && metrics.max_partition <= 4);
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= metrics.max_partition as f64);
        assert!(metrics.buckets <= live.len());
    }

    #[test]
    fn empty_live_scores_zero() {
        let scorer = GuessScorer::default();
        assert!(scorer.score(&word("crane"), &[]).abs() < f64::EPSILON);
        let metrics = scorer.metrics(&word("crane"), &[]);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
    }
}
