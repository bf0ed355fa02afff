//! Wordle Engine
//!
//! A Wordle solver that narrows the possible secrets from feedback and picks
//! each next guess by information gain or worst-case bucket size.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Pattern, Word};
//! use wordle_engine::solver::{SolverConfig, SolverSession};
//! use wordle_engine::wordlists::WordBank;
//!
//! let bank = WordBank::from_strs(&["crane", "trace", "grape", "brave", "slate"]).unwrap();
//! let secret = Word::new("brave").unwrap();
//!
//! let mut session = SolverSession::new(&bank, &SolverConfig::new(6)).unwrap();
//! while !session.is_finished() {
//!     let guess = session.next_guess().unwrap();
//!     session.submit_feedback(Pattern::calculate(&guess, &secret)).unwrap();
//! }
//! assert!(session.outcome().unwrap().is_solved());
//! ```

// Core domain types
pub mod core;

// Error type shared by the whole crate
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
