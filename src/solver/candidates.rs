//! Candidate set and feedback filtering
//!
//! Consistency is always decided by recomputing feedback: a candidate survives
//! iff guessing `guess` against it would have produced the observed pattern.
//! There is no separate interpretation of hit/present/absent rules.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashSet;

/// Words still consistent with every observed feedback, in bank order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Wrap an ordered word sequence
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The sole remaining word, if exactly one remains
    #[must_use]
    pub fn only(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [word] => Some(word),
            _ => None,
        }
    }

    /// Linear membership test
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Hash set of the live words for repeated membership tests
    #[must_use]
    pub fn to_set(&self) -> FxHashSet<Word> {
        self.words.iter().copied().collect()
    }
}

impl From<&[Word]> for CandidateSet {
    fn from(words: &[Word]) -> Self {
        Self::new(words.to_vec())
    }
}

/// Whether `candidate` could be the secret given `observed` feedback for `guess`
///
/// # Examples
/// ```
/// use wordle_engine::core::{Pattern, Word};
/// use wordle_engine::solver::is_consistent;
///
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::parse("yggxg").unwrap();
///
/// assert!(is_consistent(&Word::new("trace").unwrap(), &guess, observed));
/// assert!(!is_consistent(&Word::new("brave").unwrap(), &guess, observed));
/// ```
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, observed: Pattern) -> bool {
    Pattern::calculate(guess, candidate) == observed
}

/// Keep the words of `live` consistent with `observed`, preserving order
///
/// The result is never larger than the input. An empty result means the
/// feedback contradicts every remaining word.
#[must_use]
pub fn filter(live: &CandidateSet, guess: &Word, observed: Pattern) -> CandidateSet {
    CandidateSet::new(
        live.words
            .iter()
            .filter(|candidate| is_consistent(candidate, guess, observed))
            .copied()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::new(words_from_slice(words).unwrap())
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn filter_keeps_only_matching_in_order() {
        let live = set(&["crane", "trace", "grape", "brave", "slate"]);
        let guess = word("crane");
        let observed = Pattern::calculate(&guess, &word("grape"));

        let result = filter(&live, &guess, observed);
        assert!(result.contains(&word("grape")));
        assert!(result.len() <= live.len());
        for candidate in result.words() {
            assert_eq!(Pattern::calculate(&guess, candidate), observed);
        }
        let positions: Vec<usize> = result
            .words()
            .iter()
            .map(|w| live.words().iter().position(|l| l == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn filter_perfect_pattern_leaves_guess() {
        let live = set(&["crane", "trace", "slate"]);
        let result = filter(&live, &word("trace"), Pattern::PERFECT);
        assert_eq!(result, set(&["trace"]));
        assert_eq!(result.only(), Some(&word("trace")));
    }

    #[test]
    fn filter_is_idempotent_for_satisfied_feedback() {
        // Every word shares the same feedback against ZZZZZ
        let live = set(&["crane", "trace", "slate"]);
        let guess = word("zzzzz");
        let observed = Pattern::parse("xxxxx").unwrap();

        assert_eq!(filter(&live, &guess, observed), live);

        let once = filter(&live, &word("crane"), Pattern::parse("yggxg").unwrap());
        let twice = filter(&once, &word("crane"), Pattern::parse("yggxg").unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_impossible_feedback_is_empty() {
        let live = set(&["crane"]);
        let result = filter(&live, &word("crane"), Pattern::parse("xxxxx").unwrap());
        assert!(result.is_empty());
        assert_eq!(result.only(), None);
    }

    #[test]
    fn duplicate_letter_feedback_filters_correctly() {
        // One E credited, one not: the secret has exactly one E, not at 2 or 3
        let live = set(&["crane", "geese", "erase", "lemon"]);
        let observed = Pattern::calculate(&word("speed"), &word("crane"));
        let result = filter(&live, &word("speed"), observed);
        assert!(result.contains(&word("crane")));
        assert!(!result.contains(&word("geese")));
        assert!(!result.contains(&word("erase")));
    }

    #[test]
    fn to_set_matches_words() {
        let live = set(&["crane", "trace"]);
        let members = live.to_set();
        assert_eq!(members.len(), 2);
        assert!(members.contains(&word("trace")));
    }
}
