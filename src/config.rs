//! Runtime configuration read from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::RENDER_INTERVAL_MS;

/// Settings for one run of the game binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Delay between render ticks (`MINESWEEPER_RENDER_MS`).
    pub render_interval: Duration,
    /// Highscore file (`MINESWEEPER_SCORES_PATH`).
    pub scores_path: PathBuf,
    /// Trace log file (`MINESWEEPER_LOG_PATH`); no logging when unset.
    pub log_path: Option<PathBuf>,
    /// `EnvFilter` directive (`MINESWEEPER_LOG`).
    pub log_filter: String,
    /// Fixed seed for mine placement (`MINESWEEPER_SEED`).
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            render_interval: Duration::from_millis(RENDER_INTERVAL_MS),
            scores_path: PathBuf::from("highscores.txt"),
            log_path: None,
            log_filter: "info".to_string(),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable or empty values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let render_interval = var("MINESWEEPER_RENDER_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.render_interval);

        let scores_path = var("MINESWEEPER_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.scores_path);

        let log_path = var("MINESWEEPER_LOG_PATH").map(PathBuf::from);

        let log_filter = var("MINESWEEPER_LOG").unwrap_or(defaults.log_filter);

        let seed = var("MINESWEEPER_SEED").and_then(|s| s.parse().ok());

        Self {
            render_interval,
            scores_path,
            log_path,
            log_filter,
            seed,
        }
    }
}
