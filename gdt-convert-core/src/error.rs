//! Error types for GDT conversion
//!
//! Strongly-typed errors for the conversion pipeline, using thiserror for
//! automatic error trait implementations. Only one condition is fatal to a
//! run: the summary document being absent. Everything else degrades to
//! warnings carried on the conversion report.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The canonical summary file is absent; aborts the run
    #[error("GDT summary not found: {path}")]
    MissingSummary { path: PathBuf },

    /// A file could not be read
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document failed to parse as JSON
    #[error("malformed JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A config file failed to parse
    #[error("invalid config file {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A single component's transformation failed
    #[error("component {id}: {message}")]
    Component { id: String, message: String },

    /// The assembled record could not be rendered
    #[error("failed to render output record")]
    Render(#[source] serde_json::Error),
}

/// Result alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
