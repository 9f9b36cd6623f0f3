//! Error type shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, InvoiceError>;

/// Everything that can go wrong between reading a record and writing a PDF.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The input path does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The record is not well-formed JSON, misses a field, or holds a
    /// malformed number.
    #[error("invalid invoice data: {0}")]
    Parse(String),

    /// A value could not be formatted (e.g. a date outside `YYYY-MM-DD`).
    #[error("format error: {0}")]
    Format(String),

    /// Any other read/write failure.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No HTML-to-PDF engine could be located.
    #[error("PDF engine unavailable: {0}")]
    EngineUnavailable(String),

    /// An engine was found but the conversion failed.
    #[error("PDF engine '{engine}' failed: {reason}")]
    EngineFailure { engine: String, reason: String },
}

impl InvoiceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Whether generation must stop. Only a missing engine is tolerated:
    /// the HTML output stands on its own.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::EngineUnavailable(_))
    }
}

impl From<serde_json::Error> for InvoiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
