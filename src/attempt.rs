//! Recorded attempts and the per-session history of them.

use tracing::warn;

use crate::error::Result;
use crate::feedback::{Feedback, Notation};
use crate::word::Word;

/// One observed (guess, feedback) pair. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    guess: Word,
    feedback: Feedback,
}

impl Attempt {
    pub fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Validate raw guess and feedback text.
    pub fn parse(guess: &str, feedback: &str, notation: Notation) -> Result<Self> {
        Ok(Self {
            guess: Word::parse(guess)?,
            feedback: Feedback::parse(feedback, notation)?,
        })
    }

    pub fn guess(&self) -> &Word {
        &self.guess
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Append-only record of the attempts made in one session.
///
/// The only way to remove an attempt is [`History::reset`], which starts a
/// new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    attempts: Vec<Attempt>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from unvalidated pairs, dropping the malformed ones.
    ///
    /// A single bad extraction must not make every later query fail, so a
    /// pair that does not parse is logged and skipped.
    pub fn from_raw<I, G, F>(pairs: I, notation: Notation) -> Self
    where
        I: IntoIterator<Item = (G, F)>,
        G: AsRef<str>,
        F: AsRef<str>,
    {
        let mut history = Self::new();
        for (guess, feedback) in pairs {
            match Attempt::parse(guess.as_ref(), feedback.as_ref(), notation) {
                Ok(attempt) => history.push(attempt),
                Err(err) => warn!(
                    guess = guess.as_ref(),
                    feedback = feedback.as_ref(),
                    error = %err,
                    "dropping malformed attempt"
                ),
            }
        }
        history
    }

    pub fn push(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    pub fn reset(&mut self) {
        self.attempts.clear();
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attempt> {
        self.attempts.iter()
    }

    pub fn as_slice(&self) -> &[Attempt] {
        &self.attempts
    }
}

impl FromIterator<Attempt> for History {
    fn from_iter<T: IntoIterator<Item = Attempt>>(iter: T) -> Self {
        Self {
            attempts: iter.into_iter().collect(),
        }
    }
}
