//! Five-letter word representation
//!
//! A Word is five lowercase ASCII letters packed into a byte array. It is `Copy`,
//! hashes cheaply, and orders lexicographically, which the selector relies on
//! for reproducible tie-breaking.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Size of the letter alphabet (`a`..=`z`)
pub const ALPHABET: usize = 26;

/// A validated, lowercase five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// The input is never trimmed, truncated, or padded.
    ///
    /// # Errors
    /// Returns `Error::InvalidWord` if the input is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidWord {
            word: text.to_string(),
            reason,
        };

        if !text.is_ascii() {
            return Err(invalid("must contain only ASCII letters"));
        }
        let bytes: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| invalid("must be exactly 5 letters"))?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(invalid("must contain only letters a-z"));
        }

        Ok(Self(bytes.map(|b| b.to_ascii_lowercase())))
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic: the bytes are validated ASCII on construction.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.0).expect("validated ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Count of each letter, indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET] {
        let mut counts = [0u8; ALPHABET];
        for &b in &self.0 {
            counts[letter_index(b)] += 1;
        }
        counts
    }
}

/// Alphabet index of a lowercase ASCII letter
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
