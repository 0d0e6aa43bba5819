//! Reducing raw user input to a well-formed [`Attempt`].
//!
//! This is the single validation point in front of the engine. How the text
//! is interpreted is pluggable: a pattern for `GUESS FEEDBACK` input,
//! and a parser for the tool-call arguments an external language model
//! returns when asked to extract an attempt from free text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::attempt::Attempt;
use crate::error::NormalizeError;
use crate::feedback::Notation;

/// Turns raw text into an attempt, or explains why it could not.
pub trait Normalizer {
    fn normalize(&self, raw: &str) -> Result<Attempt, NormalizeError>;
}

impl<N: Normalizer + ?Sized> Normalizer for &N {
    fn normalize(&self, raw: &str) -> Result<Attempt, NormalizeError> {
        (**self).normalize(raw)
    }
}

impl<N: Normalizer + ?Sized> Normalizer for Box<N> {
    fn normalize(&self, raw: &str) -> Result<Attempt, NormalizeError> {
        (**self).normalize(raw)
    }
}

// Two word tokens split by whitespace or an arrow. Their length and letters
// are checked by `Attempt::parse`.
static DIRECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)(?:\s*->\s*|\s+)(\w+)\s*$").expect("valid regex"));

/// Accepts `ORATE GVVJG`, `ORATE->GVVJG` and `ORATE -> GVVJG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectNormalizer {
    notation: Notation,
}

impl DirectNormalizer {
    pub fn new(notation: Notation) -> Self {
        Self { notation }
    }
}

impl Normalizer for DirectNormalizer {
    fn normalize(&self, raw: &str) -> Result<Attempt, NormalizeError> {
        let captures = DIRECT
            .captures(raw)
            .ok_or_else(|| NormalizeError::Unrecognized {
                input: raw.to_string(),
            })?;
        Ok(Attempt::parse(&captures[1], &captures[2], self.notation)?)
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallArguments {
    #[serde(default)]
    guess: String,
    #[serde(default)]
    feedback: String,
}

/// Parses the arguments of an `extract_wordle_attempt` tool call.
///
/// Accepts the arguments object itself, the same object encoded as a JSON
/// string, or a chat response carrying it under
/// `message.tool_calls[0].function.arguments`. An empty `guess` or `feedback`
/// is how the model reports that nothing could be extracted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolCallNormalizer {
    notation: Notation,
}

impl ToolCallNormalizer {
    pub fn new(notation: Notation) -> Self {
        Self { notation }
    }
}

fn unwrap_arguments(value: Value) -> Result<Value, NormalizeError> {
    if let Value::String(encoded) = &value {
        return Ok(serde_json::from_str(encoded)?);
    }
    if value.get("message").is_some() {
        let arguments = value
            .pointer("/message/tool_calls/0/function/arguments")
            .cloned()
            .ok_or(NormalizeError::Missing { field: "tool call" })?;
        return unwrap_arguments(arguments);
    }
    Ok(value)
}

impl Normalizer for ToolCallNormalizer {
    fn normalize(&self, raw: &str) -> Result<Attempt, NormalizeError> {
        let value = unwrap_arguments(serde_json::from_str(raw)?)?;
        let arguments: ToolCallArguments = serde_json::from_value(value)?;

        if arguments.guess.trim().is_empty() {
            return Err(NormalizeError::Missing { field: "guess" });
        }
        if arguments.feedback.trim().is_empty() {
            return Err(NormalizeError::Missing { field: "feedback" });
        }
        Ok(Attempt::parse(
            &arguments.guess,
            &arguments.feedback,
            self.notation,
        )?)
    }
}

/// Tries `primary`, then `secondary`.
///
/// The secondary only runs when the primary did not recognize the input at
/// all. If neither recognizes it, the primary's error is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallback<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> Fallback<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Normalizer, B: Normalizer> Normalizer for Fallback<A, B> {
    fn normalize(&self, raw: &str) -> Result<Attempt, NormalizeError> {
        let first = match self.primary.normalize(raw) {
            Err(err) if err.is_unrecognized() => err,
            done => return done,
        };
        debug!(error = %first, "primary normalizer did not recognize input, falling back");
        match self.secondary.normalize(raw) {
            Err(second) if second.is_unrecognized() => Err(first),
            done => done,
        }
    }
}
