//! Error types for the game.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::Direction;

/// Ship movement that would leave the grid. Recoverable: the move is not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot move {direction}. Out of bounds!")]
pub struct BoundaryError {
    pub direction: Direction,
}

/// Achievement registry contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AchievementError {
    /// An achievement with this name is already registered.
    #[error("achievement already registered: {0}")]
    Duplicate(String),

    /// No achievement is registered under this name.
    #[error("unknown achievement: {0}")]
    Unknown(String),
}

/// Achievement log I/O failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write achievement log '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read achievement log '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings could not be loaded or are invalid.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Top-level error for constructing and driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Achievement(#[from] AchievementError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
