//! Error type shared by the engine and its host commands

use crate::core::{Pattern, Word};
use crate::solver::Outcome;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong inside the engine
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not exactly five ASCII letters
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    /// Feedback text does not parse to five `g`/`y`/`x` symbols
    #[error("malformed feedback {input:?}: expected 5 characters from g (hit), y (present), x (absent)")]
    MalformedFeedback { input: String },

    /// Filtering left no candidate that matches the observed feedback
    #[error("feedback {pattern} for {guess} is inconsistent with every remaining word")]
    ContradictoryFeedback { guess: Word, pattern: Pattern },

    /// Guess selection was asked to act on an empty candidate set
    #[error("no candidates remain")]
    EmptyCandidateSet,

    #[error("word list contains no words")]
    EmptyWordList,

    #[error("{0} is not in the word list")]
    UnknownWord(Word),

    #[error("{0} is not a remaining candidate, which hard mode requires")]
    HardModeViolation(Word),

    #[error("attempt limit must be at least 1, got {0}")]
    InvalidAttemptLimit(usize),

    #[error("rarity penalty must be a finite number, got {0}")]
    InvalidRarityPenalty(f64),

    /// Session method called in the wrong state
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("session already finished: {0}")]
    SessionFinished(Outcome),

    #[error("no guesses to undo")]
    NothingToUndo,

    #[error("unexpected word list entry {0:?}: expected a word and an optional tier 1-6")]
    InvalidEntry(String),

    #[error("word list line {line}: {source}")]
    WordListLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
