use maze_core::{DEFAULT_DIM, DEFAULT_LEFT_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Generation settings, loadable from a JSON file and overridable from the
/// environment (`MAZE_DIM`, `MAZE_LEFT_LIMIT`, `MAZE_SEED`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Grid side length
    pub dim: usize,

    /// Rows/cols at or below this index are never carved UP/LEFT into
    pub left_limit: usize,

    /// Start cell; both default to `left_limit`
    pub start_row: Option<usize>,
    pub start_col: Option<usize>,

    /// Seed for the shuffle source; a random one is drawn when absent
    pub seed: Option<u32>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            left_limit: DEFAULT_LEFT_LIMIT,
            start_row: None,
            start_col: None,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: MazeConfig = serde_json::from_str(&json)?;
        tracing::info!("Loaded maze config from {}", path.display());
        Ok(config)
    }

    /// Apply `MAZE_DIM`, `MAZE_LEFT_LIMIT` and `MAZE_SEED` from the process
    /// environment.
    pub fn apply_env(self) -> Result<Self, Box<dyn std::error::Error>> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`apply_env`](Self::apply_env) with an arbitrary variable lookup.
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dim) = lookup("MAZE_DIM") {
            self.dim = parse_var("MAZE_DIM", &dim)?;
        }
        if let Some(left_limit) = lookup("MAZE_LEFT_LIMIT") {
            self.left_limit = parse_var("MAZE_LEFT_LIMIT", &left_limit)?;
        }
        if let Some(seed) = lookup("MAZE_SEED") {
            self.seed = Some(parse_var("MAZE_SEED", &seed)?);
        }
        Ok(self)
    }

    /// Start cell, falling back to `(left_limit, left_limit)`
    pub fn start(&self) -> (usize, usize) {
        (
            self.start_row.unwrap_or(self.left_limit),
            self.start_col.unwrap_or(self.left_limit),
        )
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| format!("Invalid {} '{}': {}", key, value, e))
}
