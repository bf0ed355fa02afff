//! Partition of a candidate set induced by one guess
//!
//! Every candidate secret yields one feedback pattern for the guess; the
//! partition counts candidates per pattern. Counting uses a fixed table
//! indexed by pattern code, so each candidate costs one feedback
//! computation and no hashing.

use crate::core::{PATTERN_COUNT, Pattern, Word};
use rustc_hash::FxHashMap;

/// Candidate counts per feedback pattern
#[derive(Debug, Clone)]
pub struct Partition {
    counts: [u32; PATTERN_COUNT],
    total: usize,
}

impl Partition {
    /// Count `candidates` by the pattern `guess` produces against each
    #[must_use]
    pub fn of(guess: &Word, candidates: &[Word]) -> Self {
        let mut counts = [0u32; PATTERN_COUNT];
        for candidate in candidates {
            counts[usize::from(Pattern::calculate(guess, candidate).code())] += 1;
        }
        Self {
            counts,
            total: candidates.len(),
        }
    }

    /// Number of candidates partitioned
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of candidates producing `pattern`
    #[inline]
    #[must_use]
    pub const fn count(&self, pattern: Pattern) -> u32 {
        self.counts[pattern.code() as usize]
    }

    /// Non-empty buckets in pattern-code order
    pub fn buckets(&self) -> impl Iterator<Item = (Pattern, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|(code, &count)| {
                u8::try_from(code)
                    .ok()
                    .and_then(Pattern::from_code)
                    .map(|p| (p, count))
            })
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Non-empty bucket sizes, ascending
    ///
    /// Reductions that sum floating point terms iterate this order so that
    /// partitions with the same shape give bit-identical results.
    #[must_use]
    pub fn sizes(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self.counts.iter().copied().filter(|&c| c > 0).collect();
        sizes.sort_unstable();
        sizes
    }

    /// Size of the largest bucket (0 when empty)
    #[must_use]
    pub fn largest(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Group candidates by the pattern they produce with the guess
///
/// Materializes the buckets for display; scoring uses `Partition`.
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, Vec<Word>> {
    let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();
    for candidate in candidates {
        groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(*candidate);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn counts_sum_to_total() {
        let guess = Word::new("crane").unwrap();
        let candidates = words_from_slice(&["slate", "irate", "trace", "crate", "grate"]).unwrap();
        let partition = Partition::of(&guess, &candidates);

        assert_eq!(partition.total(), 5);
        assert_eq!(
            partition.buckets().map(|(_, c)| c as usize).sum::<usize>(),
            5
        );
        assert_eq!(partition.sizes().iter().sum::<u32>(), 5);
    }

    #[test]
    fn identical_feedback_lands_in_one_bucket() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]).unwrap();
        let partition = Partition::of(&guess, &candidates);

        assert_eq!(partition.bucket_count(), 1);
        assert_eq!(partition.largest(), 3);
        assert_eq!(partition.count(Pattern::from_code(0).unwrap()), 3);
    }

    #[test]
    fn empty_candidates() {
        let partition = Partition::of(&Word::new("crane").unwrap(), &[]);
        assert_eq!(partition.total(), 0);
        assert_eq!(partition.largest(), 0);
        assert!(partition.sizes().is_empty());
    }

    #[test]
    fn group_by_pattern_agrees_with_partition() {
        let guess = Word::new("crane").unwrap();
        let candidates = words_from_slice(&["slate", "crate", "grate", "trace"]).unwrap();
        let partition = Partition::of(&guess, &candidates);
        let groups = group_by_pattern(&guess, &candidates);

        assert_eq!(groups.len(), partition.bucket_count());
        for (pattern, words) in &groups {
            assert_eq!(words.len() as u32, partition.count(*pattern));
        }
    }
}
