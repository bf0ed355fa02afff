//! Scoring policies
//!
//! Both policies share the partition step and differ only in how the
//! partition is reduced to a scalar. Higher scores are always better.

use super::partition::Partition;
use clap::ValueEnum;
use std::fmt;

/// How a partition is reduced to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScoringPolicy {
    /// Shannon entropy of the partition, in bits
    #[default]
    #[value(name = "entropy", alias = "information-gain")]
    InformationGain,
    /// Negated size of the largest bucket
    #[value(name = "worst-case", alias = "minimax")]
    WorstCase,
}

impl ScoringPolicy {
    /// Reduce a partition to a score
    ///
    /// An empty partition scores 0 under either policy.
    #[must_use]
    pub fn reduce(self, partition: &Partition) -> f64 {
        match self {
            Self::InformationGain => shannon_entropy(&partition.sizes()),
            Self::WorstCase => -f64::from(partition.largest()),
        }
    }

    /// Apply a rarity factor (>= 1) so that rarer guesses score worse
    ///
    /// Entropy is divided by the factor; the worst-case score, being
    /// non-positive, is multiplied by it.
    #[must_use]
    pub fn penalize(self, score: f64, factor: f64) -> f64 {
        if score.is_infinite() {
            return score;
        }
        match self {
            Self::InformationGain => score / factor,
            Self::WorstCase => score * factor,
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InformationGain => f.write_str("entropy"),
            Self::WorstCase => f.write_str("worst-case"),
        }
    }
}

/// Shannon entropy of a distribution given as bucket sizes
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket) or no buckets
/// - Maximized for a uniform distribution, where it equals log₂(n)
///
/// # Examples
/// ```
/// use wordle_engine::solver::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 1e-9); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(sizes: &[u32]) -> f64 {
    let total: f64 = sizes.iter().map(|&c| f64::from(c)).sum();
    if total == 0.0 {
        return 0.0;
    }

    sizes
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn entropy_uniform_distribution() {
        assert!((shannon_entropy(&[1, 1, 1, 1]) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_certain_outcome() {
        assert!(shannon_entropy(&[10]).abs() < 1e-12);
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_skewed_is_lower() {
        assert!(shannon_entropy(&[25, 25, 25, 25]) > shannon_entropy(&[1, 1, 1, 97]));
    }

    #[test]
    fn entropy_bounds() {
        let sizes = [10, 20, 30];
        let entropy = shannon_entropy(&sizes);
        assert!(entropy >= 0.0);
        assert!(entropy <= (sizes.len() as f64).log2());
    }

    #[test]
    fn worst_case_is_negated_largest_bucket() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]).unwrap();
        let partition = Partition::of(&guess, &candidates);
        assert!((ScoringPolicy::WorstCase.reduce(&partition) + 3.0).abs() < f64::EPSILON);
        assert!(ScoringPolicy::InformationGain.reduce(&partition).abs() < 1e-12);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        let guess = Word::new("slate").unwrap();
        let candidates = words_from_slice(&["slate", "zzzzz"]).unwrap();
        let partition = Partition::of(&guess, &candidates);
        assert!((ScoringPolicy::InformationGain.reduce(&partition) - 1.0).abs() < 1e-9);
        assert!((ScoringPolicy::WorstCase.reduce(&partition) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn penalty_makes_scores_worse() {
        for policy in [ScoringPolicy::InformationGain, ScoringPolicy::WorstCase] {
            let base = policy.reduce(&Partition::of(
                &Word::new("crane").unwrap(),
                &words_from_slice(&["slate", "trace", "crane"]).unwrap(),
            ));
            assert!(policy.penalize(base, 2.0) <= base, "{policy}");
            assert!((policy.penalize(base, 1.0) - base).abs() < f64::EPSILON);
        }
        assert!(ScoringPolicy::InformationGain.penalize(f64::INFINITY, 3.0).is_infinite());
    }

    #[test]
    fn names_round_trip_through_clap() {
        assert_eq!(
            ScoringPolicy::from_str("entropy", true).unwrap(),
            ScoringPolicy::InformationGain
        );
        assert_eq!(
            ScoringPolicy::from_str("minimax", true).unwrap(),
            ScoringPolicy::WorstCase
        );
        assert_eq!(ScoringPolicy::WorstCase.to_string(), "worst-case");
    }
}
