//! Feedback calculation and pattern encoding
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in the secret, or all copies already matched)
//! - 1 = Present (letter in the secret, wrong position)
//! - 2 = Hit (letter in the correct position)
//!
//! Position 0 is the least significant digit, so each position contributes
//! digit × 3^position. The value range is 0-242. This is the only encoding
//! used anywhere patterns are compared or counted.

use super::word::{WORD_LEN, Word, letter_index};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the secret at this position or any unmatched one (grey)
    Absent,
    /// Letter in the secret at a different position (yellow)
    Present,
    /// Letter in the secret at this exact position (green)
    Hit,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one feedback character: `g` hit, `y` present, `x` absent
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Self::Hit),
            'y' => Some(Self::Present),
            'x' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The feedback character for this symbol
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }
}

/// Feedback pattern for a whole guess, stored as its base-3 code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All hits (the guess is the secret)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build a pattern from its code, or `None` if the code is >= 243
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < PATTERN_COUNT {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Get the raw pattern code (0-242)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Check if every position is a hit
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Encode a symbol sequence
    #[must_use]
    pub fn from_symbols(symbols: [Feedback; WORD_LEN]) -> Self {
        let code = symbols
            .iter()
            .rev()
            .fold(0u8, |acc, symbol| acc * 3 + symbol.digit());
        Self(code)
    }

    /// Decode into one symbol per guess position
    #[must_use]
    pub fn symbols(self) -> [Feedback; WORD_LEN] {
        let mut symbols = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;
        for symbol in &mut symbols {
            *symbol = Feedback::from_digit(val % 3);
            val /= 3;
        }
        symbols
    }

    /// Calculate the pattern when `guess` is played against `secret`
    ///
    /// Duplicate letters are count-limited: a letter is reported as hit or
    /// present at most as many times as it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. Count every letter of the secret.
    /// 2. First pass: mark exact position matches as hits and consume them from the counts.
    /// 3. Second pass: mark remaining positions present while the letter's count is positive,
    ///    consuming one each time; everything else is absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("trace").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// // C present, R hit, A hit, N absent, E hit
    /// assert_eq!(pattern.to_string(), "yggxg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let g = guess.bytes();
        let s = secret.bytes();
        let mut remaining = secret.letter_counts();
        let mut digits = [0u8; WORD_LEN];

        for i in 0..WORD_LEN {
            if g[i] == s[i] {
                digits[i] = 2;
                remaining[letter_index(s[i])] -= 1;
            }
        }

        for i in 0..WORD_LEN {
            if digits[i] == 0 {
                let count = &mut remaining[letter_index(g[i])];
                if *count > 0 {
                    digits[i] = 1;
                    *count -= 1;
                }
            }
        }

        Self(digits.iter().rev().fold(0u8, |acc, &d| acc * 3 + d))
    }

    /// Count the hit positions
    #[must_use]
    pub fn hits(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == Feedback::Hit)
            .count()
    }

    /// Count the present positions
    #[must_use]
    pub fn presents(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == Feedback::Present)
            .count()
    }

    /// Parse feedback text such as `"xgyxx"`
    ///
    /// One character per guess position, left to right: `g` hit, `y` present,
    /// `x` absent. Upper case is accepted.
    ///
    /// # Errors
    /// Returns `Error::MalformedFeedback` if the text is not five such characters.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || Error::MalformedFeedback {
            input: input.to_string(),
        };

        let mut symbols = [Feedback::Absent; WORD_LEN];
        let mut chars = input.chars();
        for symbol in &mut symbols {
            *symbol = chars.next().and_then(Feedback::from_char).ok_or_else(malformed)?;
        }
        if chars.next().is_some() {
            return Err(malformed());
        }

        Ok(Self::from_symbols(symbols))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols()
            .iter()
            .try_for_each(|s| write!(f, "{}", s.to_char()))
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Hit, Present};

    fn feedback(guess: &str, secret: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.code(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.hits(), 5);
        assert_eq!(Pattern::PERFECT.symbols(), [Hit; 5]);
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = feedback("abcde", "fghij");
        assert_eq!(pattern.code(), 0);
        assert_eq!(pattern.hits(), 0);
        assert_eq!(pattern.presents(), 0);
    }

    #[test]
    fn pattern_self_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "speed"] {
            assert_eq!(feedback(word, word), Pattern::PERFECT, "{word}");
        }
    }

    #[test]
    fn crane_against_trace_symbol_by_symbol() {
        // C is elsewhere in TRACE, R and A line up, N is missing, E lines up
        let symbols = feedback("crane", "trace").symbols();
        assert_eq!(symbols[0], Present);
        assert_eq!(symbols[1], Hit);
        assert_eq!(symbols[2], Hit);
        assert_eq!(symbols[3], Absent);
        assert_eq!(symbols[4], Hit);
    }

    #[test]
    fn duplicate_letters_speed_erase() {
        // S(present) P(absent) E(present) E(present) D(absent)
        let pattern = feedback("speed", "erase");
        assert_eq!(pattern.symbols(), [Present, Absent, Present, Present, Absent]);
        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        assert_eq!(pattern.code(), 37);
    }

    #[test]
    fn duplicate_letters_alloy_local() {
        // LOCAL has two L's: ALLOY may credit at most two
        let symbols = feedback("alloy", "local").symbols();
        let credited_ls = [1, 2]
            .iter()
            .filter(|&&i| symbols[i] != Absent)
            .count();
        assert!(credited_ls <= 2);
        assert_eq!(symbols, [Present, Present, Present, Present, Absent]);
    }

    #[test]
    fn duplicate_guess_letter_single_in_secret() {
        // One E in CRANE: only one of SPEED's E's is credited
        let symbols = feedback("speed", "crane").symbols();
        assert_eq!(symbols, [Absent, Absent, Present, Absent, Absent]);
    }

    #[test]
    fn hit_takes_priority_over_earlier_present() {
        // The second O of ROBOT is a hit, the first only present
        let symbols = feedback("robot", "floor").symbols();
        assert_eq!(symbols, [Present, Present, Absent, Hit, Absent]);

        // The later hit consumes the only E before the earlier E can claim it
        let symbols = feedback("eerie", "crane").symbols();
        assert_eq!(symbols, [Absent, Absent, Present, Absent, Hit]);
    }

    #[test]
    fn hits_match_positional_agreement() {
        let pairs = [
            ("crane", "trace"),
            ("speed", "erase"),
            ("alloy", "local"),
            ("robot", "floor"),
            ("aaaaa", "abaca"),
        ];
        for (guess, secret) in pairs {
            let agree = guess
                .bytes()
                .zip(secret.bytes())
                .filter(|(g, s)| g == s)
                .count();
            assert_eq!(feedback(guess, secret).hits(), agree, "{guess}/{secret}");
        }
    }

    #[test]
    fn symbols_and_code_are_inverse() {
        for code in 0..=242u8 {
            let pattern = Pattern::from_code(code).unwrap();
            assert_eq!(Pattern::from_symbols(pattern.symbols()), pattern);
        }
        assert!(Pattern::from_code(243).is_none());
    }

    #[test]
    fn position_zero_is_least_significant() {
        let pattern = Pattern::from_symbols([Hit, Absent, Absent, Absent, Absent]);
        assert_eq!(pattern.code(), 2);
        let pattern = Pattern::from_symbols([Absent, Absent, Absent, Absent, Present]);
        assert_eq!(pattern.code(), 81);
    }

    #[test]
    fn parse_valid() {
        let p1: Pattern = "gyxxg".parse().unwrap();
        let p2 = Pattern::parse("GYXXG").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.symbols(), [Hit, Present, Absent, Absent, Hit]);
        assert_eq!(p1.to_string(), "gyxxg");
    }

    #[test]
    fn parse_invalid() {
        for input in ["gyxxgx", "gyx", "", "gy-xg", "gyxx ", "🟩🟨⬜🟩🟨"] {
            assert!(
                matches!(Pattern::parse(input), Err(Error::MalformedFeedback { .. })),
                "{input:?} should be rejected"
            );
        }
    }
}
