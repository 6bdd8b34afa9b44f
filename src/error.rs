//! Error types for the TLE installer build
//!
//! Uses `thiserror` for library errors. Every variant is terminal for the
//! current run; the binary reports it once and exits non-zero.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pipeline::Stage;

/// Result type alias for build operations
pub type TleResult<T> = Result<T, TleError>;

/// Main error type for the build pipeline
#[derive(Error, Debug)]
pub enum TleError {
    /// A required input file does not exist
    #[error("{path} not found")]
    NotFound { path: PathBuf },

    /// I/O or UTF-8 decoding failure while reading an input
    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while writing the generated installer
    #[error("error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source payload contains the template's dollar-quote delimiter
    #[error("source SQL in {path} contains {marker} which conflicts with template")]
    DelimiterCollision { path: PathBuf, marker: &'static str },

    /// The version string would itself be rewritten or break the quoting
    #[error("version {version:?} contains {marker}")]
    InvalidVersion {
        version: String,
        marker: &'static str,
    },

    /// `Pipeline::run` called on a pipeline that already finished
    #[error("pipeline already ran (stage: {stage})")]
    AlreadyRun { stage: Stage },

    /// The template never contained one or more placeholders
    #[error("template {template} is missing markers: {}", .tokens.join(", "))]
    MissingPlaceholders {
        template: PathBuf,
        tokens: Vec<&'static str>,
    },

    /// Placeholder tokens survived substitution
    #[error("template markers remain after substitution: {}", .tokens.join(", "))]
    UnresolvedPlaceholders {
        template: PathBuf,
        tokens: Vec<&'static str>,
    },
}

impl TleError {
    /// The file the error refers to, for diagnostics.
    pub fn file(&self) -> Option<&Path> {
        match self {
            TleError::NotFound { path }
            | TleError::Read { path, .. }
            | TleError::Write { path, .. }
            | TleError::DelimiterCollision { path, .. } => Some(path),
            TleError::MissingPlaceholders { template, .. }
            | TleError::UnresolvedPlaceholders { template, .. } => Some(template),
            TleError::InvalidVersion { .. } | TleError::AlreadyRun { .. } => None,
        }
    }
}
