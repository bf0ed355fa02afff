//! Word solving command
//!
//! Auto-plays a known secret and records the solution path.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::solver::{Outcome, SolverConfig, SolverSession};
use crate::wordlists::WordBank;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub secret: Word,
    pub steps: Vec<SolveStep>,
    pub outcome: Outcome,
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct SolveStep {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Selector score, or `None` for a guess chosen by the caller
    pub score: Option<f64>,
}

/// Solve `secret` with a fresh session
///
/// `first_guess` replaces the selector's opening guess. A secret that is not
/// among the bank's secrets ends in `Outcome::Contradiction` once the
/// feedback rules everything out.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `first_guess` is not
/// a playable word.
pub fn solve_word(
    bank: &WordBank,
    config: &SolverConfig,
    secret: Word,
    first_guess: Option<Word>,
) -> Result<SolveReport> {
    let mut session = SolverSession::new(bank, config)?;
    let mut steps = Vec::new();

    while !session.is_finished() {
        let candidates_before = session.candidates().len();

        let (guess, score) = match first_guess {
            Some(forced) if session.attempts() == 0 => {
                session.play_guess(forced)?;
                (forced, None)
            }
            _ => {
                let ranked = session.suggest()?;
                session.play_guess(ranked.word)?;
                (ranked.word, Some(ranked.score))
            }
        };

        let pattern = Pattern::calculate(&guess, &secret);
        session.submit_feedback(pattern)?;

        steps.push(SolveStep {
            guess,
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            score,
        });
    }

    // The loop only exits once the session has finished
    let outcome = session.outcome().unwrap_or(Outcome::Exhausted {
        attempts: session.attempts(),
    });

    Ok(SolveReport {
        secret,
        steps,
        outcome,
    })
}
