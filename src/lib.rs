//! # Wordle CSP
//!
//! Computes which dictionary words are still possible after a sequence of
//! Wordle guesses and their feedback.
//!
//! The engine is two pure functions: [`compute_feedback`] scores a guess
//! against a hypothetical secret with exact duplicate-letter rules, and
//! [`filter_candidates`] keeps the words for which that score reproduces
//! every recorded feedback. Everything else in the crate (normalizing user
//! input, holding a session's history, loading word lists) feeds those two.

pub mod attempt;
pub mod audit;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod logging;
pub mod normalize;
pub mod session;
pub mod word;

pub use attempt::{Attempt, History};
pub use audit::{audit, AuditReport};
pub use error::{NormalizeError, WordleError};
pub use feedback::{compute_feedback, score, Feedback, Notation, Symbol};
pub use filter::{filter_candidates, is_consistent};
pub use normalize::{DirectNormalizer, Fallback, Normalizer, ToolCallNormalizer};
pub use session::{Outcome, Session};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
