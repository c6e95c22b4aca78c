// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StampError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<StampError>,
    },

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Dependency error: {0}")]
    Dependency(#[from] DependencyError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Pipeline stage the error originated from, looking through context wrappers.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Context { source, .. } => source.stage(),
            Self::Input(_) => Stage::Manifest,
            Self::Output(OutputError::ConfigRead { .. }) => Stage::ConfigRead,
            Self::Output(OutputError::ConfigWrite { .. }) => Stage::ConfigWrite,
            Self::Dependency(_) => Stage::Revision,
            Self::Domain(_) | Self::Presentation(PresentationError::InvalidValue { .. }) => {
                Stage::Arguments
            }
            Self::Presentation(PresentationError::Render { .. }) => Stage::Report,
        }
    }
}

/// Stage names used when reporting a fatal error to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Arguments,
    Manifest,
    Revision,
    ConfigRead,
    ConfigWrite,
    Report,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arguments => "arguments",
            Self::Manifest => "manifest",
            Self::Revision => "revision",
            Self::ConfigRead => "config read",
            Self::ConfigWrite => "config write",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Manifest errors. All of them abort the run before anything is written.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} manifest '{path}': {details}")]
    ManifestParse {
        path: PathBuf,
        format: String,
        details: String,
    },

    #[error("Manifest '{path}' has no \"version\" field")]
    MissingVersion { path: PathBuf },

    #[error("Manifest '{path}' field \"version\" must be a string, found {found}")]
    VersionNotString { path: PathBuf, found: String },

    #[error("Manifest '{path}' declares an unusable version: {reason}")]
    InvalidVersion { path: PathBuf, reason: String },
}

pub type InputResult<T> = std::result::Result<T, InputError>;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to read file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type OutputResult<T> = std::result::Result<T, OutputError>;

/// Source-control query errors. Callers degrade instead of aborting.
#[derive(Debug, Error)]
pub enum DependencyError {
    #[error("Failed to run '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("'{command}' produced no usable output: {details}")]
    UnusableOutput { command: String, details: String },
}

pub type DependencyResult<T> = std::result::Result<T, DependencyError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid entry key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Version key and build-date key must differ (both are '{key}')")]
    DuplicateKeys { key: String },

    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("Invalid revision '{value}': {reason}")]
    InvalidRevision { value: String, reason: String },

    #[error("Invalid build date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Failed to render {format} output: {details}")]
    Render { format: String, details: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StampError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<StampError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| StampError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StampError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
