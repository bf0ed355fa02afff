//! Word analysis command
//!
//! Shows how one guess would split the possible secrets.

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::solver::{GuessMetrics, GuessScorer, ScoringPolicy, group_by_pattern};
use crate::wordlists::WordBank;
use std::cmp::Reverse;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub total_candidates: usize,
    /// Whether the word could itself be the secret
    pub is_candidate: bool,
    pub metrics: GuessMetrics,
    /// Score under each policy
    pub scores: Vec<(ScoringPolicy, f64)>,
    /// Largest feedback buckets, biggest first
    pub buckets: Vec<(Pattern, Vec<Word>)>,
}

/// Analyze `word` as a first guess against every possible secret
///
/// # Errors
///
/// Returns `Error::UnknownWord` if the word is not in the bank.
pub fn analyze_word(bank: &WordBank, word: Word, top_buckets: usize) -> Result<AnalysisResult> {
    if !bank.contains(&word) {
        return Err(Error::UnknownWord(word));
    }

    let secrets = bank.secrets();
    let scores = [ScoringPolicy::InformationGain, ScoringPolicy::WorstCase]
        .into_iter()
        .map(|policy| (policy, GuessScorer::new(policy).score(&word, secrets)))
        .collect();

    let mut buckets: Vec<(Pattern, Vec<Word>)> = group_by_pattern(&word, secrets).into_iter().collect();
    buckets.sort_unstable_by_key(|(pattern, words)| (Reverse(words.len()), *pattern));
    buckets.truncate(top_buckets);

    Ok(AnalysisResult {
        word,
        total_candidates: secrets.len(),
        is_candidate: secrets.contains(&word),
        metrics: GuessScorer::default().metrics(&word, secrets),
        scores,
        buckets,
    })
}
