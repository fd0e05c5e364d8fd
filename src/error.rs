//! Error types for html-inliner
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for html-inliner operations
pub type InlineResult<T> = Result<T, InlineError>;

/// Main error type for a build run
#[derive(Error, Debug)]
pub enum InlineError {
    /// An artifact the assembler expects was not emitted, or its content is unavailable
    #[error("missing {what}: {}", path.display())]
    ConfigurationMissing { what: String, path: PathBuf },

    /// The emitted artifacts cannot be assembled into one document
    #[error("assembly failed: {reason}")]
    AssemblyFailure { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a finalized file failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed or failed validation
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Environment override could not be resolved
    #[error("cannot resolve {key}={value:?}: expected true, false, 1 or 0")]
    InvalidEnv { key: String, value: String },

    /// Build manifest could not be parsed
    #[error("invalid build manifest {}: {message}", file.display())]
    InvalidManifest { file: PathBuf, message: String },

    /// Output file name escapes the output directory
    #[error("output path '{}' escapes output directory '{}'", path.display(), root.display())]
    PathEscape { path: PathBuf, root: PathBuf },

    /// A lifecycle hook fired out of order
    #[error("illegal run transition {from} -> {to}")]
    Lifecycle { from: String, to: String },
}

impl InlineError {
    /// Shorthand for an [`InlineError::AssemblyFailure`]
    pub fn assembly(reason: impl Into<String>) -> Self {
        Self::AssemblyFailure {
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`InlineError::ConfigurationMissing`]
    pub fn missing(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ConfigurationMissing {
            what: what.into(),
            path: path.into(),
        }
    }

    /// Whether this error belongs to the IO failure class
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Write { .. })
    }
}
