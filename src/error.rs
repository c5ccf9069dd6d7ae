//! Error types shared across the crate.

use std::path::PathBuf;

/// Rule configuration that cannot be used for detection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold must be at least 1, got {0}")]
    InvalidThreshold(i64),

    #[error("window_minutes must not be negative, got {0}")]
    InvalidWindow(i64),

    #[error("malformed rule document: {0}")]
    Malformed(String),
}

/// A line matched the failed-password shape but its timestamp is not a real
/// calendar instant (e.g. `2024-02-30T25:00:00`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("invalid timestamp {text:?}: {source}")]
    Unparsable {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid timestamp {text:?}: second 60 is not accepted")]
    LeapSecond { text: String },
}

impl TimestampError {
    /// The timestamp text as it appeared in the line
    pub fn text(&self) -> &str {
        match self {
            TimestampError::Unparsable { text, .. } | TimestampError::LeapSecond { text } => text,
        }
    }
}

/// Top-level error for one detection run.
#[derive(Debug, thiserror::Error)]
pub enum LogHunterError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("line {line_number}: {source}")]
    Timestamp {
        line_number: usize,
        #[source]
        source: TimestampError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogHunterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
