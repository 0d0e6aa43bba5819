//! Candidate filtering against an attempt history.
//!
//! A word stays a candidate exactly when scoring every recorded guess
//! against it, as if it were the secret, reproduces the recorded feedback.
//! The oracle already encodes duplicate-letter semantics, so no separate
//! green/yellow/gray bookkeeping is kept.

use tracing::trace;

use crate::attempt::Attempt;
use crate::feedback::compute_feedback;
use crate::word::Word;

/// Whether `word` could be the secret given every attempt in `history`.
///
/// Stops at the first attempt the word contradicts.
pub fn is_consistent(word: &Word, history: &[Attempt]) -> bool {
    history
        .iter()
        .all(|attempt| compute_feedback(word, attempt.guess()) == attempt.feedback())
}

/// Keep the candidates consistent with the whole history, in input order.
///
/// Entries that are not canonical lowercase words are dropped without error,
/// so every returned slice is canonical. Padding and uppercase count as
/// malformed here; the dictionary loader canonicalizes them. An empty history
/// keeps every valid entry; an empty result means the history contradicts
/// itself for this dictionary.
pub fn filter_candidates<'a, S>(candidates: &'a [S], history: &[Attempt]) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    let kept: Vec<&str> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|raw| {
            Word::from_canonical(raw).is_some_and(|word| is_consistent(&word, history))
        })
        .collect();

    trace!(
        candidates = candidates.len(),
        attempts = history.len(),
        kept = kept.len(),
        "filtered candidates"
    );
    kept
}
