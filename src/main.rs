//! Wordle Engine - CLI
//!
//! Suggests guesses for a Wordle game in progress, or replays the solver
//! against known secrets.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use std::io;
use std::path::PathBuf;
use wordle_engine::{
    commands::{analyze_word, run_benchmark, run_play, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_report},
    solver::{Mode, ScoringPolicy, SolverConfig, SolverSession},
    wordlists::{WordBank, loader::load_bank},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle solver that picks each guess by information gain or worst case",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list of valid guesses: one word per line, optional tier 1-6
    #[arg(short, long, global = true, value_name = "PATH")]
    wordlist: Option<PathBuf>,

    /// Separate list of possible answers (default: the word list)
    #[arg(long, global = true, value_name = "PATH")]
    secrets: Option<PathBuf>,

    /// How guesses are scored
    #[arg(short, long, global = true, value_enum, default_value_t = ScoringPolicy::InformationGain)]
    policy: ScoringPolicy,

    /// Only guess words that could still be the answer
    #[arg(long, global = true)]
    hard: bool,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = 6)]
    max_attempts: usize,

    /// Cap on feedback computations per guess selection (default: exhaustive)
    #[arg(long, global = true)]
    sample_budget: Option<usize>,

    /// Seed for candidate sampling
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Penalty weight for the rarest words, 1.0 disables (needs tiered word lists)
    #[arg(long, global = true, default_value_t = 1.0)]
    rarity_penalty: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: get suggestions and type back the feedback (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per guess
        #[arg(short, long)]
        verbose: bool,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Show how a word splits the possible answers
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of feedback buckets to list
        #[arg(short, long, default_value_t = 5)]
        top: usize,
    },

    /// Solve every possible answer and report statistics
    Benchmark {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig::new(self.max_attempts)
            .with_mode(if self.hard { Mode::Hard } else { Mode::Normal })
            .with_policy(self.policy)
            .with_sample_budget(self.sample_budget)
            .with_seed(self.seed)
            .with_rarity_penalty(self.rarity_penalty)
    }

    fn load_bank(&self) -> Result<WordBank> {
        let wordlist = self
            .wordlist
            .as_deref()
            .context("no word list given; pass --wordlist <PATH>")?;
        let bank = load_bank(wordlist, self.secrets.as_deref())
            .with_context(|| format!("failed to load word list {}", wordlist.display()))?;
        if self.rarity_penalty > 1.0 && !bank.has_tiers() {
            warn!("--rarity-penalty has no effect: the word lists carry no tiers");
        }
        Ok(bank)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.config();
    config.validate()?;
    let bank = cli.load_bank()?;

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            let mut session = SolverSession::new(&bank, &config)?;
            run_play(&mut session, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Solve {
            word,
            verbose,
            first_word,
        } => {
            let secret = parse_word(word)?;
            if !bank.secrets().contains(&secret) {
                warn!("{secret} is not among the possible answers");
            }
            let first = first_word.as_deref().map(parse_word).transpose()?;
            let report = solve_word(&bank, &config, secret, first)?;
            print_solve_report(&report, *verbose);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&bank, parse_word(word)?, *top)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { limit, first_word } => {
            let first = first_word.as_deref().map(parse_word).transpose()?;
            let result = run_benchmark(&bank, &config, *limit, first, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("'{text}' is not a valid word"))
}
