//! Feedback and filtering properties over a small word list

use wordle_engine::core::{Feedback, Pattern, Word};
use wordle_engine::solver::{CandidateSet, filter, is_consistent};
use wordle_engine::wordlists::loader::words_from_slice;

const WORDS: [&str; 16] = [
    "crane", "trace", "grape", "brave", "slate", "speed", "erase", "alloy", "local", "eerie",
    "robot", "floor", "sassy", "mamma", "level", "xylyl",
];

fn words() -> Vec<Word> {
    words_from_slice(&WORDS).unwrap()
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn word_against_itself_is_all_hit() {
    for w in words() {
        assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT, "{w}");
    }
}

#[test]
fn hits_count_exact_position_matches() {
    for guess in words() {
        for secret in words() {
            let agree = guess
                .bytes()
                .iter()
                .zip(secret.bytes())
                .filter(|(g, s)| g == s)
                .count();
            assert_eq!(Pattern::calculate(&guess, &secret).hits(), agree);
        }
    }
}

#[test]
fn marked_letters_never_exceed_secret_counts() {
    for guess in words() {
        for secret in words() {
            let symbols = Pattern::calculate(&guess, &secret).symbols();
            let available = secret.letter_counts();
            let mut marked = [0u8; 26];
            for (letter, symbol) in guess.bytes().iter().zip(symbols) {
                if symbol != Feedback::Absent {
                    marked[usize::from(letter - b'a')] += 1;
                }
            }
            for (m, a) in marked.iter().zip(available) {
                assert!(*m <= a, "{guess} vs {secret}");
            }
        }
    }
}

#[test]
fn crane_against_trace_symbol_by_symbol() {
    let symbols = Pattern::calculate(&word("crane"), &word("trace")).symbols();
    assert_eq!(symbols[0], Feedback::Present); // C is in TRACE, elsewhere
    assert_eq!(symbols[1], Feedback::Hit); // R
    assert_eq!(symbols[2], Feedback::Hit); // A
    assert_eq!(symbols[3], Feedback::Absent); // N
    assert_eq!(symbols[4], Feedback::Hit); // E
}

#[test]
fn duplicate_letters_are_capped() {
    // SPEED vs ERASE: two E's in the secret, both may be marked
    let speed = Pattern::calculate(&word("speed"), &word("erase")).symbols();
    assert_eq!(
        speed,
        [
            Feedback::Present,
            Feedback::Absent,
            Feedback::Present,
            Feedback::Present,
            Feedback::Absent
        ]
    );

    // ALLOY vs LOCAL: only two L's to mark
    let alloy = Pattern::calculate(&word("alloy"), &word("local")).symbols();
    let l_marked = alloy[1..=2]
        .iter()
        .filter(|&&s| s != Feedback::Absent)
        .count();
    assert_eq!(l_marked, 2);
}

#[test]
fn filtering_never_grows() {
    let live = CandidateSet::new(words());
    for guess in words() {
        for code in 0..=242u8 {
            let observed = Pattern::from_code(code).unwrap();
            let filtered = filter(&live, &guess, observed);
            assert!(filtered.len() <= live.len());
            assert!(
                filtered
                    .words()
                    .iter()
                    .all(|c| is_consistent(c, &guess, observed))
            );
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let live = CandidateSet::new(words());
    for guess in words() {
        for secret in words() {
            let observed = Pattern::calculate(&guess, &secret);
            let once = filter(&live, &guess, observed);
            let twice = filter(&once, &guess, observed);
            assert_eq!(once.words(), twice.words());
            assert!(once.contains(&secret));
        }
    }
}
