//! A solving session: one dictionary, one attempt history.

use tracing::{debug, info};

use crate::attempt::{Attempt, History};
use crate::error::NormalizeError;
use crate::filter::filter_candidates;
use crate::normalize::Normalizer;

/// What the candidate set looks like after an accepted attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The feedback was all hits, or exactly one candidate is left. An empty
    /// candidate set is never solved.
    Solved(String),
    /// Candidates remain; the count is included.
    Remaining(usize),
    /// No dictionary word satisfies every attempt. Usually an earlier
    /// attempt was entered or extracted wrongly.
    Inconsistent,
}

#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Vec<String>,
    history: History,
    candidates: Vec<String>,
}

impl Session {
    pub fn new(dictionary: Vec<String>) -> Self {
        let mut session = Self {
            dictionary,
            history: History::new(),
            candidates: Vec::new(),
        };
        session.recompute();
        session
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// Start a new game with the same dictionary.
    pub fn reset(&mut self) {
        self.history.reset();
        self.recompute();
        info!(candidates = self.candidates.len(), "session reset");
    }

    /// Normalize `raw` and record it. On failure the history is unchanged.
    pub fn submit<N>(&mut self, raw: &str, normalizer: &N) -> Result<Outcome, NormalizeError>
    where
        N: Normalizer + ?Sized,
    {
        let attempt = normalizer.normalize(raw)?;
        Ok(self.record(attempt))
    }

    /// Append an already-normalized attempt and refresh the candidates.
    pub fn record(&mut self, attempt: Attempt) -> Outcome {
        self.history.push(attempt);
        self.recompute();
        info!(
            guess = %attempt.guess(),
            feedback = %attempt.feedback(),
            attempts = self.history.len(),
            candidates = self.candidates.len(),
            "attempt recorded"
        );

        match self.candidates.as_slice() {
            [] => Outcome::Inconsistent,
            _ if attempt.feedback().is_solved() => Outcome::Solved(attempt.guess().to_string()),
            [only] => Outcome::Solved(only.clone()),
            rest => Outcome::Remaining(rest.len()),
        }
    }

    // Always from scratch: the history is the only source of truth.
    fn recompute(&mut self) {
        self.candidates = filter_candidates(&self.dictionary, self.history.as_slice())
            .into_iter()
            .map(str::to_string)
            .collect();
        debug!(
            dictionary = self.dictionary.len(),
            candidates = self.candidates.len(),
            "recomputed candidates"
        );
    }
}
