//! Error types for persistence and rejected interactive input.

use std::path::PathBuf;

/// Errors that can occur while loading or saving the data file.
#[derive(Debug)]
pub enum StoreError {
    /// Reading, writing, or renaming the file failed.
    Io { path: PathBuf, source: std::io::Error },
    /// The file is not valid JSON for the store.
    Parse { path: PathBuf, source: serde_json::Error },
    /// The store could not be encoded.
    Encode(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            StoreError::Parse { path, source } => {
                write!(f, "parse {}: {}", path.display(), source)
            }
            StoreError::Encode(e) => write!(f, "encode data: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Parse { source, .. } => Some(source),
            StoreError::Encode(e) => Some(e),
        }
    }
}

/// Input that the interactive flow rejects and asks for again.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputError {
    /// Not an integer.
    NotANumber(String),
    /// Zero or negative where a positive count is required.
    NotPositive,
    /// Bracket type other than Winners, Losers, or Pools.
    UnknownBracket(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NotANumber(_) => write!(f, "Invalid number, try again."),
            InputError::NotPositive => write!(f, "Please enter a positive integer."),
            InputError::UnknownBracket(_) => {
                write!(f, "Invalid input. Please enter one of: Winners, Losers, Pools.")
            }
        }
    }
}

impl std::error::Error for InputError {}
