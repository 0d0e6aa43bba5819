//! Fixed-length, case-normalized words.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordleError};
use crate::WORD_LENGTH;

/// A validated word: exactly [`WORD_LENGTH`] ASCII letters, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse and canonicalize a word. Surrounding whitespace is ignored and
    /// letters are folded to lowercase.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let actual = s.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordleError::LengthMismatch {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (position, c) in s.chars().enumerate() {
            if !c.is_ascii_alphabetic() {
                return Err(WordleError::InvalidLetter {
                    letter: c,
                    position,
                });
            }
            letters[position] = c.to_ascii_lowercase() as u8;
        }
        Ok(Self(letters))
    }

    /// Accept `s` only when it is already canonical: exactly
    /// [`WORD_LENGTH`] lowercase ASCII letters and nothing else.
    pub fn from_canonical(s: &str) -> Option<Self> {
        let letters: [u8; WORD_LENGTH] = s.as_bytes().try_into().ok()?;
        letters
            .iter()
            .all(u8::is_ascii_lowercase)
            .then_some(Self(letters))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }

    /// Index of the letter at `position` in `0..26`.
    pub(crate) fn letter_index(&self, position: usize) -> usize {
        (self.0[position] - b'a') as usize
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_folds_case_and_trims() {
        let word = Word::parse("  CrAnE\n").unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.to_uppercase(), "CRANE");
    }

    #[test]
    fn from_canonical_needs_exact_lowercase_form() {
        assert_eq!(
            Word::from_canonical("crane"),
            Some(Word::parse("crane").unwrap())
        );
        for raw in [" crane", "crane\t", "CrAnE", "CRANE", "cranes", "cr4ne", "crané"] {
            assert_eq!(Word::from_canonical(raw), None, "input {:?}", raw);
        }
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Word::parse("cranes"),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            Word::parse(""),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            Word::parse("cr4ne"),
            Err(WordleError::InvalidLetter {
                letter: '4',
                position: 2
            })
        );
        assert_eq!(
            Word::parse("crané"),
            Err(WordleError::InvalidLetter {
                letter: 'é',
                position: 4
            })
        );
    }
}
