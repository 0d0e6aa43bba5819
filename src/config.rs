//! Solver configuration stored in `wordle-csp.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::feedback::Notation;

pub const DEFAULT_CONFIG_PATH: &str = "wordle-csp.toml";

/// Missing fields fall back to [`Config::default`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Word list, one word per line. The embedded list is used when unset.
    pub dictionary: Option<PathBuf>,

    /// Letters feedback is typed in.
    pub notation: Notation,

    /// How many candidates to print after each attempt.
    pub display_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            notation: Notation::Gyb,
            display_limit: 30,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.display_limit == 0 {
            return Err(anyhow!("display_limit must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `Config::default()`.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        let cfg = Config::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
