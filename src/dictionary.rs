//! Word-list loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::word::Word;

const EMBEDDED: &str = include_str!("../dictionary/words.txt");

/// Canonicalize one word per line. Blank lines are ignored; rows that are
/// not valid words are dropped and counted.
pub fn parse_dictionary(text: &str) -> Vec<String> {
    let mut dropped = 0usize;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::parse(line) {
            Ok(word) => Some(word.to_string()),
            Err(_) => {
                dropped += 1;
                None
            }
        })
        .collect();

    if dropped > 0 {
        warn!(dropped, kept = words.len(), "skipped malformed dictionary rows");
    }
    words
}

/// The word list bundled with the binary.
pub fn load_embedded() -> Vec<String> {
    parse_dictionary(EMBEDDED)
}

/// Load a word list from `path`, or the embedded list when `path` is `None`.
pub fn load_dictionary(path: Option<&Path>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read dictionary {}", path.display()))?;
            parse_dictionary(&text)
        }
        None => load_embedded(),
    };
    info!(words = words.len(), "dictionary loaded");
    Ok(words)
}
