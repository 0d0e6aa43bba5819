//! Feedback calculation for Wordle guesses.
//!
//! This module owns the feedback alphabet (hit/present/absent), the packed
//! [`Feedback`] pattern, the textual notations users type feedback in, and
//! the oracle that scores a guess against a hypothetical secret.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, WordleError};
use crate::word::Word;
use crate::WORD_LENGTH;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Correct letter in correct position (green)
    Hit,
    /// Letter occurs in the secret, but not here (yellow)
    Present,
    /// Letter not in the secret, or all its occurrences already credited (gray)
    Absent,
}

impl Symbol {
    /// Convert to a character for display
    pub fn to_emoji(self) -> char {
        match self {
            Symbol::Hit => '🟩',
            Symbol::Present => '🟨',
            Symbol::Absent => '⬛',
        }
    }

    fn digit(self) -> u8 {
        match self {
            Symbol::Absent => 0,
            Symbol::Present => 1,
            Symbol::Hit => 2,
        }
    }
}

/// The letters a user types feedback in.
///
/// `g` is green in one alphabet and gray in the other, so the notation is
/// always an explicit choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// g/2 = hit, y/1 = present, b/x/0 = absent
    #[default]
    Gyb,
    /// v = hit (vert), j = present (jaune), g = absent (gris)
    Vjg,
}

impl Notation {
    /// Parse from a character, case-insensitively.
    pub fn symbol(self, c: char) -> Option<Symbol> {
        match (self, c.to_ascii_lowercase()) {
            (Notation::Gyb, 'g' | '2') => Some(Symbol::Hit),
            (Notation::Gyb, 'y' | '1') => Some(Symbol::Present),
            (Notation::Gyb, 'b' | 'x' | '0') => Some(Symbol::Absent),
            (Notation::Vjg, 'v') => Some(Symbol::Hit),
            (Notation::Vjg, 'j') => Some(Symbol::Present),
            (Notation::Vjg, 'g') => Some(Symbol::Absent),
            _ => None,
        }
    }

    /// Canonical uppercase letter for a symbol.
    pub fn letter(self, symbol: Symbol) -> char {
        match (self, symbol) {
            (Notation::Gyb, Symbol::Hit) => 'G',
            (Notation::Gyb, Symbol::Present) => 'Y',
            (Notation::Gyb, Symbol::Absent) => 'B',
            (Notation::Vjg, Symbol::Hit) => 'V',
            (Notation::Vjg, Symbol::Present) => 'J',
            (Notation::Vjg, Symbol::Absent) => 'G',
        }
    }
}

/// A complete feedback pattern for a guess.
/// Encoded as a single u8 value (0-242).
/// Each position can be 0 (absent), 1 (present), or 2 (hit).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// The pattern of a solved game
    pub const ALL_HIT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    pub fn from_symbols(symbols: [Symbol; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for symbol in symbols {
            pattern += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    pub fn symbols(self) -> [Symbol; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut symbols = [Symbol::Absent; WORD_LENGTH];
        for symbol in symbols.iter_mut() {
            *symbol = match pattern % 3 {
                0 => Symbol::Absent,
                1 => Symbol::Present,
                _ => Symbol::Hit,
            };
            pattern /= 3;
        }
        symbols
    }

    pub fn is_solved(self) -> bool {
        self == Self::ALL_HIT
    }

    /// Parse a pattern such as `"gybbb"`, `"21000"` or `"VJGGG"`.
    pub fn parse(s: &str, notation: Notation) -> Result<Self> {
        let s = s.trim();
        let actual = s.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordleError::LengthMismatch {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut symbols = [Symbol::Absent; WORD_LENGTH];
        for (position, c) in s.chars().enumerate() {
            symbols[position] = notation
                .symbol(c)
                .ok_or(WordleError::InvalidSymbol { symbol: c, position })?;
        }
        Ok(Self::from_symbols(symbols))
    }

    pub fn to_notation_string(self, notation: Notation) -> String {
        self.symbols().iter().map(|&s| notation.letter(s)).collect()
    }

    pub fn to_emoji_string(self) -> String {
        self.symbols().iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Score `guess` against `secret` with the standard Wordle rules.
///
/// Exact matches are credited first and consume the secret's letters; the
/// remaining occurrences are then handed out left to right as `Present`.
/// No secret letter is ever credited twice.
pub fn compute_feedback(secret: &Word, guess: &Word) -> Feedback {
    let secret_bytes = secret.as_bytes();
    let guess_bytes = guess.as_bytes();

    let mut symbols = [Symbol::Absent; WORD_LENGTH];
    let mut remaining = [0u8; 26];
    for i in 0..WORD_LENGTH {
        remaining[secret.letter_index(i)] += 1;
    }

    for i in 0..WORD_LENGTH {
        if guess_bytes[i] == secret_bytes[i] {
            symbols[i] = Symbol::Hit;
            remaining[secret.letter_index(i)] -= 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if symbols[i] != Symbol::Hit {
            let idx = guess.letter_index(i);
            if remaining[idx] > 0 {
                symbols[i] = Symbol::Present;
                remaining[idx] -= 1;
            }
        }
    }

    Feedback::from_symbols(symbols)
}

/// Checked form of [`compute_feedback`] for unvalidated strings.
pub fn score(secret: &str, guess: &str) -> Result<Feedback> {
    let secret = Word::parse(secret)?;
    let guess = Word::parse(guess)?;
    Ok(compute_feedback(&secret, &guess))
}
