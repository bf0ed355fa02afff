//! Word lists for the solver
//!
//! The `WordBank` is built once at startup and shared read-only by every
//! session. It separates the words that may be guessed from the words that
//! may be the secret, and optionally records a frequency tier per word.

pub mod loader;

use crate::core::Word;
use crate::error::{Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// Rarest frequency tier
pub const RARE_TIER: u8 = 1;

/// Most common frequency tier, assumed for words without one
pub const COMMON_TIER: u8 = 6;

/// Immutable, deduplicated guess and secret lists
#[derive(Debug, Clone)]
pub struct WordBank {
    guesses: Vec<Word>,
    secrets: Vec<Word>,
    index: FxHashSet<Word>,
    tiers: FxHashMap<Word, u8>,
}

impl WordBank {
    /// Create a bank where every word is both a valid guess and a possible secret
    ///
    /// # Errors
    /// Returns `Error::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        let words = dedup(words);
        Self::with_secrets(words.clone(), words)
    }

    /// Create a bank with a distinct secret list
    ///
    /// Secrets missing from the guess list are appended to it, so every
    /// possible secret is also a valid guess.
    ///
    /// # Errors
    /// Returns `Error::EmptyWordList` if `secrets` is empty.
    pub fn with_secrets(guesses: Vec<Word>, secrets: Vec<Word>) -> Result<Self> {
        let secrets = dedup(secrets);
        if secrets.is_empty() {
            return Err(Error::EmptyWordList);
        }

        let mut guesses = dedup(guesses);
        let mut index: FxHashSet<Word> = guesses.iter().copied().collect();
        for &secret in &secrets {
            if index.insert(secret) {
                guesses.push(secret);
            }
        }

        Ok(Self {
            guesses,
            secrets,
            index,
            tiers: FxHashMap::default(),
        })
    }

    /// Convenience constructor from string slices
    ///
    /// # Errors
    /// Returns `Error::InvalidWord` for any malformed entry, or
    /// `Error::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_strs(&["crane", "slate", "CRANE"]).unwrap();
    /// assert_eq!(bank.guesses().len(), 2);
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self> {
        Self::new(loader::words_from_slice(words)?)
    }

    /// Attach frequency tiers (1 = rare, 6 = common)
    ///
    /// Tiers for words not in the bank are ignored.
    #[must_use]
    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = (Word, u8)>) -> Self {
        for (word, tier) in tiers {
            if self.index.contains(&word) {
                self.tiers.insert(word, tier.clamp(RARE_TIER, COMMON_TIER));
            }
        }
        self
    }

    /// All valid guesses, in load order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// All possible secrets, in load order
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    /// Whether `word` is a valid guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Frequency tier of `word`, defaulting to `COMMON_TIER`
    #[must_use]
    pub fn tier(&self, word: &Word) -> u8 {
        self.tiers.get(word).copied().unwrap_or(COMMON_TIER)
    }

    /// Whether any word carries an explicit tier
    #[must_use]
    pub fn has_tiers(&self) -> bool {
        !self.tiers.is_empty()
    }
}

/// Remove duplicates, keeping the first occurrence
fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|w| seen.insert(*w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        loader::words_from_slice(list).unwrap()
    }

    #[test]
    fn new_deduplicates_in_order() {
        let bank = WordBank::new(words(&["slate", "crane", "slate", "brave"])).unwrap();
        let texts: Vec<&str> = bank.guesses().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "brave"]);
        assert_eq!(bank.guesses(), bank.secrets());
    }

    #[test]
    fn empty_bank_rejected() {
        assert!(matches!(WordBank::new(vec![]), Err(Error::EmptyWordList)));
        assert!(matches!(
            WordBank::with_secrets(words(&["crane"]), vec![]),
            Err(Error::EmptyWordList)
        ));
    }

    #[test]
    fn secrets_are_merged_into_guesses() {
        let bank = WordBank::with_secrets(words(&["crane", "soare"]), words(&["crane", "brave"]))
            .unwrap();
        assert_eq!(bank.guesses().len(), 3);
        assert_eq!(bank.secrets().len(), 2);
        assert!(bank.contains(&Word::new("brave").unwrap()));
        assert!(bank.contains(&Word::new("soare").unwrap()));
    }

    #[test]
    fn tiers_default_to_common() {
        let crane = Word::new("crane").unwrap();
        let xylyl = Word::new("xylyl").unwrap();
        let bank = WordBank::new(vec![crane, xylyl])
            .unwrap()
            .with_tiers([(xylyl, 1), (Word::new("other").unwrap(), 3)]);

        assert_eq!(bank.tier(&crane), COMMON_TIER);
        assert_eq!(bank.tier(&xylyl), RARE_TIER);
        assert!(bank.has_tiers());
    }
}
