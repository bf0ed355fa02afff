//! Core domain types for the word game
//!
//! Words, per-position feedback symbols, and the compact pattern encoding.
//! Everything here is pure and allocation-free on the hot path.

mod pattern;
mod word;

pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use word::{ALPHABET, WORD_LEN, Word};
