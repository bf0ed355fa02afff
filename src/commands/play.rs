//! Interactive text mode
//!
//! The solver suggests each guess; the player types back the feedback the
//! game showed. Works over any reader and writer so it can be scripted.

use crate::Error;
use crate::core::{Pattern, Word};
use crate::output::formatters::{ordinal, pattern_to_emoji};
use crate::solver::{Outcome, SessionState, SolverSession};
use anyhow::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
Enter the feedback for each guess, one symbol per letter:
  g = right letter, right spot
  y = in the word, wrong spot
  x = not in the word
Commands: 'win' (all green), 'undo', 'new', 'play <word>' to guess your own word, 'quit'";

/// Largest candidate count still listed word by word
const LISTED_MAX: usize = 30;

enum Command {
    Quit,
    New,
    Undo,
    Play(String),
    Feedback(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let lower = line.trim().to_lowercase();
        match lower.as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "undo" | "u" => Self::Undo,
            "win" | "correct" | "solved" => Self::Feedback("ggggg".to_string()),
            _ => match lower.strip_prefix("play ") {
                Some(word) => Self::Play(word.trim().to_string()),
                None => Self::Feedback(lower),
            },
        }
    }
}

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut SolverSession<'_>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{HELP}\n")?;

    loop {
        if session.state() == SessionState::AwaitingGuess {
            match session.next_guess() {
                Ok(guess) => announce(&mut out, session, guess)?,
                Err(Error::EmptyCandidateSet) => {
                    writeln!(out, "No words fit that feedback. Type 'undo' or 'new'.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match Command::parse(&line) {
            Command::Quit => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            Command::New => {
                session.reset();
                writeln!(out, "New game.")?;
            }
            Command::Undo => undo(&mut out, session)?,
            Command::Play(text) => play_own_word(&mut out, session, &text)?,
            Command::Feedback(text) => match Pattern::parse(&text) {
                Ok(pattern) => match session.submit_feedback(pattern) {
                    Ok(SessionState::Finished(outcome)) => finished(&mut out, session, outcome)?,
                    Ok(_) => {}
                    Err(err) => writeln!(out, "{err}")?,
                },
                Err(err) => writeln!(out, "{err}. Type g, y or x for each letter.")?,
            },
        }
    }
}

fn announce<W: Write>(out: &mut W, session: &SolverSession<'_>, guess: Word) -> Result<()> {
    let remaining = session.candidates().len();
    writeln!(
        out,
        "My {} guess is: {}",
        ordinal(session.attempts()),
        guess.text().to_uppercase()
    )?;
    if remaining > 1 {
        writeln!(out, "({remaining} words still possible)")?;
        if remaining <= LISTED_MAX {
            let words: Vec<String> = session
                .candidates()
                .words()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            writeln!(out, "  {}", words.join(" "))?;
        }
    }
    Ok(())
}

/// Withdraw the pending guess together with the feedback before it
fn undo<W: Write>(out: &mut W, session: &mut SolverSession<'_>) -> Result<()> {
    if matches!(session.state(), SessionState::AwaitingFeedback { .. }) {
        session.undo()?;
    }
    match session.undo() {
        Ok(()) => writeln!(out, "Undone. Back to guess {}.", session.attempts() + 1)?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn play_own_word<W: Write>(out: &mut W, session: &mut SolverSession<'_>, text: &str) -> Result<()> {
    let word = match Word::new(text) {
        Ok(word) => word,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };
    if let SessionState::AwaitingFeedback { guess } = session.state() {
        session.undo()?;
        if let Err(err) = session.play_guess(word) {
            writeln!(out, "{err}")?;
            session.play_guess(guess)?;
            return Ok(());
        }
        writeln!(out, "OK, you play {}.", word.text().to_uppercase())?;
    } else if let Err(err) = session.play_guess(word) {
        writeln!(out, "{err}")?;
    }
    Ok(())
}

fn finished<W: Write>(out: &mut W, session: &SolverSession<'_>, outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Solved { .. } => {
            writeln!(out, "Solved! {outcome}.")?;
            for turn in session.history() {
                writeln!(
                    out,
                    "  {} {}",
                    turn.guess.text().to_uppercase(),
                    pattern_to_emoji(turn.pattern)
                )?;
            }
        }
        Outcome::Exhausted { .. } => writeln!(out, "Out of guesses: {outcome}.")?,
        Outcome::Contradiction { .. } => {
            writeln!(out, "No words fit that feedback. Type 'undo' or 'new'.")?;
        }
    }
    writeln!(out, "Type 'new' to play again or 'quit' to exit.")?;
    Ok(())
}
