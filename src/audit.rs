//! Self-consistency audit of the oracle and the filter.
//!
//! Every dictionary word is taken in turn as the secret. A fixed guess
//! sequence is scored against it, the dictionary is filtered with the
//! resulting history, and the secret must still be among the candidates.
//! Secrets are independent, so they are sharded across threads; each one
//! owns its history and the dictionary is only read.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::attempt::{Attempt, History};
use crate::feedback::compute_feedback;
use crate::filter::filter_candidates;
use crate::word::Word;

/// Result of auditing one secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretAudit {
    pub secret: Word,
    pub history: History,
    pub remaining: usize,
    pub survived: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub secrets: Vec<SecretAudit>,
}

impl AuditReport {
    /// Secrets the filter wrongly eliminated. Empty for a correct engine.
    pub fn violations(&self) -> Vec<&SecretAudit> {
        self.secrets.iter().filter(|s| !s.survived).collect()
    }

    /// `(remaining set size, number of secrets)` pairs, ascending by size.
    pub fn distribution(&self) -> Vec<(usize, usize)> {
        let max_remaining = self.secrets.iter().map(|s| s.remaining).max().unwrap_or(0);
        let mut distribution = vec![0usize; max_remaining + 1];

        for audit in &self.secrets {
            distribution[audit.remaining] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn average_remaining(&self) -> f64 {
        if self.secrets.is_empty() {
            return 0.0;
        }
        let total: usize = self.secrets.iter().map(|s| s.remaining).sum();
        total as f64 / self.secrets.len() as f64
    }
}

fn audit_secret<S: AsRef<str> + Sync>(
    dictionary: &[S],
    secret: Word,
    guesses: &[Word],
) -> SecretAudit {
    let history: History = guesses
        .iter()
        .map(|guess| Attempt::new(*guess, compute_feedback(&secret, guess)))
        .collect();
    let remaining = filter_candidates(dictionary, history.as_slice());
    let survived = remaining
        .iter()
        .any(|candidate| Word::from_canonical(candidate) == Some(secret));

    SecretAudit {
        secret,
        history,
        remaining: remaining.len(),
        survived,
    }
}

/// Audit every dictionary word the filter accepts as a secret against `guesses`.
pub fn audit<S>(dictionary: &[S], guesses: &[Word]) -> AuditReport
where
    S: AsRef<str> + Sync,
{
    let secrets: Vec<Word> = dictionary
        .iter()
        .filter_map(|raw| Word::from_canonical(raw.as_ref()))
        .collect();
    info!(
        secrets = secrets.len(),
        guesses = guesses.len(),
        "starting self-consistency audit"
    );

    let secrets: Vec<SecretAudit> = secrets
        .par_iter()
        .map(|&secret| audit_secret(dictionary, secret, guesses))
        .collect();

    let report = AuditReport { secrets };
    let violations = report.violations().len();
    if violations > 0 {
        warn!(violations, "secrets eliminated by their own feedback");
    }
    report
}
