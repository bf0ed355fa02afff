//! One solving attempt as a state machine
//!
//! ```text
//! AwaitingGuess ──guess──▶ AwaitingFeedback ──feedback──▶ (filter) ──▶ AwaitingGuess
//!                                   │                         │
//!                                   └─ all hits ─▶ Solved     ├─ empty ─▶ Contradiction
//!                                                             └─ limit ─▶ Exhausted
//! ```
//!
//! Terminal states accept no further guesses or feedback. `undo` and `reset`
//! are host-level recovery and work from any state.

use super::candidates::{self, CandidateSet};
use super::config::SolverConfig;
use super::selector::{GuessSelector, Mode, RankedGuess};
use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::wordlists::WordBank;
use log::{debug, info, warn};
use std::fmt;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All-hit feedback was received
    Solved { attempts: usize },
    /// The attempt limit was reached without all-hit feedback
    Exhausted { attempts: usize },
    /// The feedback history ruled out every word in the bank
    Contradiction { attempts: usize },
}

impl Outcome {
    #[must_use]
    pub const fn attempts(self) -> usize {
        match self {
            Self::Solved { attempts }
            | Self::Exhausted { attempts }
            | Self::Contradiction { attempts } => attempts,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: usize| if n == 1 { "guess" } else { "guesses" };
        match *self {
            Self::Solved { attempts } => write!(f, "solved in {attempts} {}", plural(attempts)),
            Self::Exhausted { attempts } => {
                write!(f, "not solved within {attempts} {}", plural(attempts))
            }
            Self::Contradiction { attempts } => write!(
                f,
                "feedback contradicts every word after {attempts} {}",
                plural(attempts)
            ),
        }
    }
}

/// Where the session is in the guess/feedback loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    AwaitingFeedback { guess: Word },
    Finished(Outcome),
}

impl SessionState {
    const fn name(self) -> &'static str {
        match self {
            Self::AwaitingGuess => "awaiting a guess",
            Self::AwaitingFeedback { .. } => "awaiting feedback",
            Self::Finished(_) => "finished",
        }
    }
}

/// One played guess and what it left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates remaining after this feedback
    pub remaining: usize,
}

/// State of one solving attempt
///
/// Borrows the shared word bank; owns its candidate set exclusively.
#[derive(Debug, Clone)]
pub struct SolverSession<'a> {
    bank: &'a WordBank,
    selector: GuessSelector,
    mode: Mode,
    max_attempts: usize,
    candidates: CandidateSet,
    history: Vec<Turn>,
    attempts: usize,
    state: SessionState,
}

impl<'a> SolverSession<'a> {
    /// Start a session with every possible secret as a candidate
    ///
    /// # Errors
    /// Returns `Error::InvalidAttemptLimit` or `Error::InvalidRarityPenalty`
    /// if the configuration is invalid.
    pub fn new(bank: &'a WordBank, config: &SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bank,
            selector: config.selector(),
            mode: config.mode,
            max_attempts: config.max_attempts,
            candidates: CandidateSet::from(bank.secrets()),
            history: Vec::new(),
            attempts: 0,
            state: SessionState::AwaitingGuess,
        })
    }

    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guesses played so far, including one awaiting feedback
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished(_))
    }

    /// The guess the selector would play next, without playing it
    ///
    /// # Errors
    /// Fails unless the session is awaiting a guess, or with
    /// `Error::EmptyCandidateSet` if nothing remains.
    pub fn suggest(&self) -> Result<RankedGuess> {
        self.expect_awaiting_guess("suggest a guess")?;
        self.selector.best(&self.candidates, self.mode, self.bank)
    }

    /// Select and play the next guess
    ///
    /// An empty candidate set ends the session as a contradiction.
    ///
    /// # Errors
    /// Fails unless the session is awaiting a guess, or with
    /// `Error::EmptyCandidateSet` if nothing remains.
    pub fn next_guess(&mut self) -> Result<Word> {
        self.expect_awaiting_guess("guess")?;
        match self.selector.select_next(&self.candidates, self.mode, self.bank) {
            Ok(guess) => {
                self.play(guess);
                Ok(guess)
            }
            Err(err) => {
                if matches!(err, Error::EmptyCandidateSet) {
                    self.finish(Outcome::Contradiction {
                        attempts: self.attempts,
                    });
                }
                Err(err)
            }
        }
    }

    /// Play a guess chosen by the host instead of the selector
    ///
    /// # Errors
    /// Returns `Error::UnknownWord` for words outside the bank,
    /// `Error::HardModeViolation` for non-candidates in hard mode, or a state
    /// error unless the session is awaiting a guess.
    pub fn play_guess(&mut self, guess: Word) -> Result<()> {
        self.expect_awaiting_guess("guess")?;
        if !self.bank.contains(&guess) {
            return Err(Error::UnknownWord(guess));
        }
        if self.mode == Mode::Hard && !self.candidates.contains(&guess) {
            return Err(Error::HardModeViolation(guess));
        }
        self.play(guess);
        Ok(())
    }

    /// Apply the feedback observed for the pending guess
    ///
    /// Returns the new state. Contradictory feedback finishes the session
    /// rather than failing.
    ///
    /// # Errors
    /// Fails if no guess is awaiting feedback.
    pub fn submit_feedback(&mut self, pattern: Pattern) -> Result<SessionState> {
        let guess = match self.state {
            SessionState::AwaitingFeedback { guess } => guess,
            SessionState::Finished(outcome) => return Err(Error::SessionFinished(outcome)),
            SessionState::AwaitingGuess => {
                return Err(Error::InvalidTransition {
                    action: "submit feedback",
                    state: self.state.name(),
                });
            }
        };
        debug!("attempt {}: {guess} -> {pattern}", self.attempts);

        if pattern.is_perfect() {
            self.candidates = CandidateSet::new(vec![guess]);
            self.history.push(Turn {
                guess,
                pattern,
                remaining: 1,
            });
            self.finish(Outcome::Solved {
                attempts: self.attempts,
            });
            return Ok(self.state);
        }

        let before = self.candidates.len();
        self.candidates = candidates::filter(&self.candidates, &guess, pattern);
        self.history.push(Turn {
            guess,
            pattern,
            remaining: self.candidates.len(),
        });
        debug!("filtered {before} -> {} candidates", self.candidates.len());

        if self.candidates.is_empty() {
            warn!("{}", Error::ContradictoryFeedback { guess, pattern });
            self.finish(Outcome::Contradiction {
                attempts: self.attempts,
            });
        } else if self.attempts >= self.max_attempts {
            self.finish(Outcome::Exhausted {
                attempts: self.attempts,
            });
        } else {
            self.state = SessionState::AwaitingGuess;
        }
        Ok(self.state)
    }

    /// Take back the pending guess, or else the last guess and its feedback
    ///
    /// Works from any state, including finished ones. The candidate set is
    /// rebuilt by replaying the remaining history.
    ///
    /// # Errors
    /// Returns `Error::NothingToUndo` if no guess has been played.
    pub fn undo(&mut self) -> Result<()> {
        if let SessionState::AwaitingFeedback { guess } = self.state {
            debug!("withdrew pending guess {guess}");
            self.attempts -= 1;
            self.state = SessionState::AwaitingGuess;
            return Ok(());
        }

        let turn = self.history.pop().ok_or(Error::NothingToUndo)?;
        self.candidates = self.replay();
        self.attempts = self.history.len();
        self.state = SessionState::AwaitingGuess;
        debug!(
            "undid {} ({}); {} candidates remain",
            turn.guess,
            turn.pattern,
            self.candidates.len()
        );
        Ok(())
    }

    /// Start over with the same bank and configuration
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::from(self.bank.secrets());
        self.history.clear();
        self.attempts = 0;
        self.state = SessionState::AwaitingGuess;
    }

    fn expect_awaiting_guess(&self, action: &'static str) -> Result<()> {
        match self.state {
            SessionState::AwaitingGuess => Ok(()),
            SessionState::Finished(outcome) => Err(Error::SessionFinished(outcome)),
            state @ SessionState::AwaitingFeedback { .. } => Err(Error::InvalidTransition {
                action,
                state: state.name(),
            }),
        }
    }

    fn play(&mut self, guess: Word) {
        self.attempts += 1;
        debug!(
            "attempt {}/{}: playing {guess} with {} candidates",
            self.attempts,
            self.max_attempts,
            self.candidates.len()
        );
        self.state = SessionState::AwaitingFeedback { guess };
    }

    fn finish(&mut self, outcome: Outcome) {
        info!("session {outcome}");
        self.state = SessionState::Finished(outcome);
    }

    /// Candidates consistent with the whole history
    fn replay(&self) -> CandidateSet {
        self.history.iter().fold(
            CandidateSet::from(self.bank.secrets()),
            |live, turn| {
                if turn.pattern.is_perfect() {
                    CandidateSet::new(vec![turn.guess])
                } else {
                    candidates::filter(&live, &turn.guess, turn.pattern)
                }
            },
        )
    }
}
