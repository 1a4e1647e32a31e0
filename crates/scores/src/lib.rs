//! Highscore table and its score file.
//!
//! The file holds one `"<score> <name>"` record per line, best first, at most
//! [`HIGHSCORE_CAPACITY`] lines. A missing file is an empty table. Lines that
//! do not parse are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

pub use tui_minesweeper_types as types;

use crate::types::HIGHSCORE_CAPACITY;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("failed to write score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighscoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Parse a `"<score> <name>"` record.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let score = parts.next()?.parse().ok()?;
        let name = parts.next()?;
        Some(Self::new(name, score))
    }
}

/// Best scores, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highscores {
    entries: Vec<HighscoreEntry>,
}

impl Highscores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse score file contents, ranked and capped like a recorded table.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        for (n, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match HighscoreEntry::parse(line) {
                Some(entry) => entries.push(entry),
                None => warn!(line = n + 1, "skipping malformed highscore record"),
            }
        }
        let mut scores = Self { entries };
        scores.sort();
        scores.entries.truncate(HIGHSCORE_CAPACITY);
        scores
    }

    /// Read the score file. Any read failure yields an empty table.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => {
                let scores = Self::parse(&text);
                debug!(path = %path.display(), entries = scores.len(), "highscores loaded");
                scores
            }
            Err(e) => {
                info!(path = %path.display(), error = %e, "no highscores loaded");
                Self::new()
            }
        }
    }

    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: HighscoreEntry) {
        self.entries.push(entry);
    }

    /// Sort best first. Equal scores keep insertion order, so an existing
    /// record outranks a newer one with the same score.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Add a score, re-rank and keep the top [`HIGHSCORE_CAPACITY`].
    pub fn record(&mut self, entry: HighscoreEntry) {
        self.add(entry);
        self.sort();
        self.entries.truncate(HIGHSCORE_CAPACITY);
    }

    /// Serialize the top entries in file format.
    pub fn to_file_string(&self) -> String {
        self.entries
            .iter()
            .take(HIGHSCORE_CAPACITY)
            .map(|e| format!("{} {}\n", e.score, e.name))
            .collect()
    }

    /// Write the top entries to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ScoreError> {
        fs::write(path, self.to_file_string()).map_err(|source| ScoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "highscores saved");
        Ok(())
    }
}
