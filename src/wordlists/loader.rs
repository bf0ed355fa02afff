//! Word list loading utilities
//!
//! Text format: one word per line, optionally followed by whitespace and a
//! frequency tier from 1 (rare) to 6 (common). Blank lines and lines starting
//! with `#` are skipped. Any other malformed line is an error; entries are
//! never silently dropped.

use super::{COMMON_TIER, RARE_TIER, WordBank};
use crate::core::Word;
use crate::error::{Error, Result};
use log::info;
use std::fs;
use std::path::Path;

/// One parsed word list line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub word: Word,
    pub tier: Option<u8>,
}

/// Parse word list text
///
/// # Errors
/// Returns `Error::WordListLine` naming the first malformed line.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::parse_entries;
///
/// let entries = parse_entries("# answers\ncrane 6\nxylyl 1\n\nslate\n").unwrap();
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[1].tier, Some(1));
/// assert_eq!(entries[2].tier, None);
/// ```
pub fn parse_entries(text: &str) -> Result<Vec<Entry>> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(parse_line(trimmed).map_err(|source| Error::WordListLine {
                    line: i + 1,
                    source: Box::new(source),
                }))
            }
        })
        .collect()
}

fn parse_line(line: &str) -> Result<Entry> {
    let mut fields = line.split_whitespace();
    let word = Word::new(fields.next().unwrap_or_default())?;
    let tier = fields
        .next()
        .map(|field| {
            field
                .parse::<u8>()
                .ok()
                .filter(|t| (RARE_TIER..=COMMON_TIER).contains(t))
                .ok_or_else(|| Error::InvalidEntry(line.to_string()))
        })
        .transpose()?;

    if fields.next().is_some() {
        return Err(Error::InvalidEntry(line.to_string()));
    }

    Ok(Entry { word, tier })
}

/// Load and parse a word list file
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or a line error if it is malformed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries = parse_entries(&content)?;
    info!(
        "loaded {} entries from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(entries)
}

/// Build a bank from a guess list file and an optional secret list file
///
/// Tiers from both files are attached; a tier in the secret list wins.
///
/// # Errors
/// Returns any load error, or `Error::EmptyWordList` if no secrets remain.
pub fn load_bank(guesses: &Path, secrets: Option<&Path>) -> Result<WordBank> {
    let guess_entries = load_from_file(guesses)?;
    let secret_entries = secrets.map(load_from_file).transpose()?;

    let tiers: Vec<(Word, u8)> = guess_entries
        .iter()
        .chain(secret_entries.iter().flatten())
        .filter_map(|e| e.tier.map(|t| (e.word, t)))
        .collect();

    let guess_words: Vec<Word> = guess_entries.iter().map(|e| e.word).collect();
    let bank = match secret_entries {
        Some(secret_entries) => {
            WordBank::with_secrets(guess_words, secret_entries.iter().map(|e| e.word).collect())?
        }
        None => WordBank::new(guess_words)?,
    };

    Ok(bank.with_tiers(tiers))
}

/// Convert string slices to words
///
/// # Errors
/// Returns `Error::InvalidWord` for the first malformed entry.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "SLATE"]).unwrap();
/// assert_eq!(words[1].text(), "slate");
/// assert!(words_from_slice(&["crane", "toolong"]).is_err());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>> {
    slice.iter().map(|s| Word::new(s)).collect()
}
