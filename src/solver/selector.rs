//! Next-guess selection
//!
//! Every allowed guess is scored independently against the same immutable
//! candidate set, so the pool is scored in parallel and reduced with a total
//! order: higher score, then live candidates, then the lexicographically
//! smallest word. The winner does not depend on thread scheduling.

use super::candidates::CandidateSet;
use super::scoring::{GuessScorer, WIN_SCORE};
use crate::core::Word;
use crate::error::{Error, Result};
use crate::wordlists::{COMMON_TIER, RARE_TIER, WordBank};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Smallest candidate sample scored when a budget applies
///
/// A single-word sample would make every guess equal to it look like a sure win.
const MIN_SAMPLE: usize = 2;

/// Largest candidate set where a clearly more common word is guessed outright
const COMMON_SHORTCUT_MAX: usize = 6;

/// Which words may be guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Any word in the bank
    #[default]
    Normal,
    /// Only words still possible as the secret
    Hard,
}

impl Mode {
    /// The allowed-guess pool for this mode
    #[must_use]
    pub fn pool<'a>(self, live: &'a CandidateSet, bank: &'a WordBank) -> &'a [Word] {
        match self {
            Self::Normal => bank.guesses(),
            Self::Hard => live.words(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Hard => f.write_str("hard"),
        }
    }
}

/// Penalty applied to rarer guesses
///
/// Base penalties for tiers 1 (rare) to 6 (common) are rescaled so that the
/// rarest tier gets `highest` and the most common gets 1. `highest = 1.0`
/// disables the penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityPenalty {
    highest: f64,
}

impl RarityPenalty {
    pub const NONE: Self = Self { highest: 1.0 };

    const BASE: [f64; 6] = [3.0, 2.0, 1.5, 1.25, 1.1, 1.0];

    /// Create a penalty whose rarest tier is weighted by `highest` (clamped to >= 1)
    ///
    /// A non-finite `highest` disables the penalty.
    #[must_use]
    pub fn new(highest: f64) -> Self {
        if !highest.is_finite() {
            return Self::NONE;
        }
        Self {
            highest: highest.max(1.0),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.highest > 1.0
    }

    /// Multiplicative factor for a frequency tier
    #[must_use]
    pub fn factor(&self, tier: u8) -> f64 {
        let base = Self::BASE[usize::from(tier.clamp(RARE_TIER, COMMON_TIER) - 1)];
        (self.highest - 1.0) * (base - 1.0) / 2.0 + 1.0
    }

    /// Factor gap by which the most common candidate must lead to be guessed outright
    fn common_margin(&self) -> f64 {
        (self.highest - 1.0) / 4.0
    }
}

impl Default for RarityPenalty {
    fn default() -> Self {
        Self::NONE
    }
}

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    pub score: f64,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
}

impl RankedGuess {
    /// Total order where `Greater` means a better guess
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.is_candidate.cmp(&other.is_candidate))
            .then(other.word.cmp(&self.word))
    }
}

/// Chooses the next guess
#[derive(Debug, Clone)]
pub struct GuessSelector {
    scorer: GuessScorer,
    sample_budget: Option<usize>,
    seed: u64,
    rarity: RarityPenalty,
}

impl GuessSelector {
    /// Exhaustive selector with no rarity penalty
    #[must_use]
    pub const fn new(scorer: GuessScorer) -> Self {
        Self {
            scorer,
            sample_budget: None,
            seed: 0,
            rarity: RarityPenalty::NONE,
        }
    }

    /// Cap feedback computations per selection by sampling the candidates
    ///
    /// Sampling is seeded, so selections stay reproducible.
    #[must_use]
    pub const fn with_sample_budget(mut self, budget: Option<usize>, seed: u64) -> Self {
        self.sample_budget = budget;
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_rarity_penalty(mut self, rarity: RarityPenalty) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub const fn scorer(&self) -> &GuessScorer {
        &self.scorer
    }

    /// Choose the next guess
    ///
    /// A single remaining candidate is returned without scoring.
    ///
    /// # Errors
    /// Returns `Error::EmptyCandidateSet` if `live` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::solver::{CandidateSet, GuessScorer, GuessSelector, Mode};
    /// use wordle_engine::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_strs(&["aaaaa", "aeros", "slate", "irate"]).unwrap();
    /// let live = CandidateSet::from(&bank.secrets()[2..]);
    /// let selector = GuessSelector::new(GuessScorer::default());
    ///
    /// let guess = selector.select_next(&live, Mode::Hard, &bank).unwrap();
    /// assert_eq!(guess.text(), "irate"); // tied with slate, smaller word wins
    /// ```
    pub fn select_next(&self, live: &CandidateSet, mode: Mode, bank: &WordBank) -> Result<Word> {
        self.best(live, mode, bank).map(|ranked| ranked.word)
    }

    /// Choose the next guess, returning its score
    ///
    /// # Errors
    /// Returns `Error::EmptyCandidateSet` if `live` is empty.
    pub fn best(&self, live: &CandidateSet, mode: Mode, bank: &WordBank) -> Result<RankedGuess> {
        if live.is_empty() {
            return Err(Error::EmptyCandidateSet);
        }
        if let Some(&only) = live.only() {
            return Ok(RankedGuess {
                word: only,
                score: WIN_SCORE,
                is_candidate: true,
            });
        }

        let members = live.to_set();
        if let Some(common) = self.common_candidate(live, bank) {
            debug!("guessing {common}, clearly the most common of {} candidates", live.len());
            return Ok(self.rank_one(&common, live.words(), &members, bank));
        }

        let pool = mode.pool(live, bank);
        let sample = self.sample(live, pool.len());

        let best = pool
            .par_iter()
            .map(|guess| self.rank_one(guess, &sample, &members, bank))
            .max_by(RankedGuess::rank_cmp)
            .ok_or(Error::EmptyCandidateSet)?;

        debug!(
            "selected {} (score {:.4}) from {} {mode}-mode guesses over {} of {} candidates",
            best.word,
            best.score,
            pool.len(),
            sample.len(),
            live.len()
        );
        Ok(best)
    }

    /// Score the whole allowed-guess pool, best first
    ///
    /// This is the plain score order; the small-set rarity shortcut of
    /// [`best`](Self::best) is not applied.
    ///
    /// # Errors
    /// Returns `Error::EmptyCandidateSet` if `live` is empty.
    pub fn rank(
        &self,
        live: &CandidateSet,
        mode: Mode,
        bank: &WordBank,
    ) -> Result<Vec<RankedGuess>> {
        if live.is_empty() {
            return Err(Error::EmptyCandidateSet);
        }

        let pool = mode.pool(live, bank);
        let sample = self.sample(live, pool.len());
        let members = live.to_set();

        let mut ranked: Vec<RankedGuess> = pool
            .par_iter()
            .map(|guess| self.rank_one(guess, &sample, &members, bank))
            .collect();
        ranked.par_sort_unstable_by(|a, b| b.rank_cmp(a));
        Ok(ranked)
    }

    fn rank_one(
        &self,
        guess: &Word,
        sample: &[Word],
        members: &FxHashSet<Word>,
        bank: &WordBank,
    ) -> RankedGuess {
        let mut score = self.scorer.score(guess, sample);
        if self.rarity.is_active() {
            score = self
                .scorer
                .policy()
                .penalize(score, self.rarity.factor(bank.tier(guess)));
        }
        RankedGuess {
            word: *guess,
            score,
            is_candidate: members.contains(guess),
        }
    }

    /// With the rarity penalty on and few candidates left, the candidate to
    /// guess without scoring
    ///
    /// Two candidates: the more common one (the first on a tie). Up to
    /// `COMMON_SHORTCUT_MAX`: the most common one if it leads the next by the
    /// penalty's margin. Otherwise scoring could favor a common non-candidate
    /// that cannot win over rarer words that can.
    fn common_candidate(&self, live: &CandidateSet, bank: &WordBank) -> Option<Word> {
        if !self.rarity.is_active() || live.len() > COMMON_SHORTCUT_MAX {
            return None;
        }
        let mut factors: Vec<(f64, Word)> = live
            .words()
            .iter()
            .map(|word| (self.rarity.factor(bank.tier(word)), *word))
            .collect();
        // Stable, so equally common words keep candidate order
        factors.sort_by(|a, b| a.0.total_cmp(&b.0));

        match factors.as_slice() {
            [(_, first), _] => Some(*first),
            [(lead, first), (next, _), ..] if *lead <= *next - self.rarity.common_margin() => {
                Some(*first)
            }
            _ => None,
        }
    }

    /// Sampling seed for one selection
    ///
    /// Mixes in the candidate count so successive turns of a session draw
    /// different samples while staying reproducible.
    fn sample_seed(&self, live_len: usize) -> u64 {
        self.seed ^ (live_len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    /// Candidates each guess is scored against
    ///
    /// All of them unless a budget applies and `pool_len × |live|` exceeds it;
    /// then an order-preserving seeded sample of `budget / pool_len` words.
    fn sample<'a>(&self, live: &'a CandidateSet, pool_len: usize) -> Cow<'a, [Word]> {
        let Some(budget) = self.sample_budget else {
            return Cow::Borrowed(live.words());
        };
        let per_guess = (budget / pool_len.max(1)).max(MIN_SAMPLE);
        if per_guess >= live.len() {
            return Cow::Borrowed(live.words());
        }

        let mut rng = StdRng::seed_from_u64(self.sample_seed(live.len()));
        let mut indices = rand::seq::index::sample(&mut rng, live.len(), per_guess).into_vec();
        indices.sort_unstable();
        debug!(
            "sampling {per_guess} of {} candidates to stay within {budget} comparisons",
            live.len()
        );
        Cow::Owned(indices.into_iter().map(|i| live.words()[i]).collect())
    }
}
