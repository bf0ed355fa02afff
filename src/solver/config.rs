//! Solver configuration

use super::scoring::{GuessScorer, ScoringPolicy};
use super::selector::{GuessSelector, Mode, RarityPenalty};
use crate::error::{Error, Result};

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Normal or hard mode
    pub mode: Mode,
    /// How guesses are scored
    pub policy: ScoringPolicy,
    /// Guesses allowed before the session is exhausted
    pub max_attempts: usize,
    /// Cap on feedback computations per selection (`None` = exhaustive)
    pub sample_budget: Option<usize>,
    /// Seed for candidate sampling
    pub seed: u64,
    /// Penalty weight of the rarest word tier (1.0 = off)
    pub rarity_penalty: f64,
}

impl SolverConfig {
    /// Normal mode, information gain, exhaustive scoring, no rarity penalty
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self {
            mode: Mode::Normal,
            policy: ScoringPolicy::InformationGain,
            max_attempts,
            sample_budget: None,
            seed: 0,
            rarity_penalty: 1.0,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn with_sample_budget(mut self, budget: Option<usize>) -> Self {
        self.sample_budget = budget;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_rarity_penalty(mut self, highest: f64) -> Self {
        self.rarity_penalty = highest;
        self
    }

    /// Check settings that have no sensible interpretation
    ///
    /// # Errors
    /// Returns `Error::InvalidAttemptLimit` if `max_attempts` is 0, or
    /// `Error::InvalidRarityPenalty` if `rarity_penalty` is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::InvalidAttemptLimit(self.max_attempts));
        }
        if !self.rarity_penalty.is_finite() {
            return Err(Error::InvalidRarityPenalty(self.rarity_penalty));
        }
        Ok(())
    }

    /// Build the guess selector described by this configuration
    #[must_use]
    pub fn selector(&self) -> GuessSelector {
        GuessSelector::new(GuessScorer::new(self.policy))
            .with_sample_budget(self.sample_budget, self.seed)
            .with_rarity_penalty(RarityPenalty::new(self.rarity_penalty))
    }
}
