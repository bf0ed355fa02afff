//! Benchmark command
//!
//! Solves many secrets and summarizes solver performance.

use super::solve::solve_word;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::solver::{CandidateSet, Outcome, SolverConfig};
use crate::wordlists::WordBank;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Number of hardest words kept in the result
const HARDEST_KEPT: usize = 10;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub first_guess: Word,
    pub solved: usize,
    pub exhausted: usize,
    pub contradicted: usize,
    /// Solved words per guess count
    pub distribution: BTreeMap<usize, usize>,
    /// Average guesses over solved words
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Words that took the most guesses or were not solved, worst first
    pub hardest: Vec<(Word, Outcome)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve the first `limit` secrets (all if `None`)
///
/// The opening guess is the same for every secret, so it is selected once
/// (or taken from `first_guess`) and forced on every run.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `first_guess` is not
/// a playable word.
pub fn run_benchmark(
    bank: &WordBank,
    config: &SolverConfig,
    limit: Option<usize>,
    first_guess: Option<Word>,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    config.validate()?;
    let first_guess = match first_guess {
        Some(word) if !bank.contains(&word) => return Err(Error::UnknownWord(word)),
        Some(word) => word,
        None => config.selector().select_next(
            &CandidateSet::from(bank.secrets()),
            config.mode,
            bank,
        )?,
    };

    let secrets = &bank.secrets()[..limit.unwrap_or(usize::MAX).min(bank.secrets().len())];
    info!(
        "benchmarking {} secrets, opening with {first_guess}",
        secrets.len()
    );

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(secrets.len());
    let mut solved_guesses = 0;

    for secret in secrets {
        let report = solve_word(bank, config, *secret, Some(first_guess))?;
        if report.outcome.is_solved() {
            solved_guesses += report.outcome.attempts();
        }
        outcomes.push((*secret, report.outcome));

        if outcomes.len() % 10 == 0 {
            pb.set_message(format!(
                "Avg: {:.2}",
                solved_guesses as f64 / outcomes.len() as f64
            ));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    Ok(summarize(first_guess, &outcomes, start.elapsed()))
}

fn summarize(first_guess: Word, outcomes: &[(Word, Outcome)], duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let (mut exhausted, mut contradicted) = (0, 0);
    for (_, outcome) in outcomes {
        match outcome {
            Outcome::Solved { attempts } => *distribution.entry(*attempts).or_insert(0) += 1,
            Outcome::Exhausted { .. } => exhausted += 1,
            Outcome::Contradiction { .. } => contradicted += 1,
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(guesses, n)| guesses * n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    // Unsolved words rank above any solved one
    let mut hardest: Vec<(Word, Outcome)> = outcomes.to_vec();
    hardest.sort_by_key(|(word, outcome)| (!outcome.is_solved(), outcome.attempts(), Reverse(*word)));
    hardest.reverse();
    hardest.truncate(HARDEST_KEPT);

    let total_words = outcomes.len();
    BenchmarkResult {
        total_words,
        first_guess,
        solved,
        exhausted,
        contradicted,
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        average_guesses,
        hardest,
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
    }
}
