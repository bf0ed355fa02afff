//! Wordle solving engine
//!
//! Candidate filtering, guess scoring and selection, and the session state
//! machine that drives them.

mod candidates;
mod config;
pub mod scoring;
mod selector;
mod session;

pub use candidates::{CandidateSet, filter, is_consistent};
pub use config::SolverConfig;
pub use scoring::{
    GuessMetrics, GuessScorer, Partition, ScoringPolicy, WIN_SCORE, group_by_pattern,
    shannon_entropy,
};
pub use selector::{GuessSelector, Mode, RankedGuess, RarityPenalty};
pub use session::{Outcome, SessionState, SolverSession, Turn};
