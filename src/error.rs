//! Error handling for CAN log conversion.
//!
//! `ConversionError` covers failures inside a conversion pipeline and maps
//! onto the load/field/write taxonomy. `Error` is the crate-level error for
//! configuration and front-end plumbing.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a failure, for callers that want structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input unreadable or malformed delimited structure
    Load,
    /// Expected field present but not convertible
    Field,
    /// Destination not writable
    Write,
    /// Invalid configuration
    Config,
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to load {path}: {message}")]
    Load {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    #[error("Invalid field '{column}' in {path}: {message}")]
    Field {
        path: PathBuf,
        column: String,
        message: String,
    },

    #[error("Failed to write {path}: {message}")]
    Write {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ConversionError {
    /// Create a load error, optionally wrapping the CSV reader failure
    pub fn load(path: &Path, message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            message: message.into(),
            source,
        }
    }

    /// Create a field conversion error
    pub fn field(path: &Path, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            path: path.to_path_buf(),
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a write error, optionally wrapping the I/O failure
    pub fn write(path: &Path, message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            message: message.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load { .. } => ErrorKind::Load,
            Self::Field { .. } => ErrorKind::Field,
            Self::Write { .. } => ErrorKind::Write,
        }
    }
}

/// Crate-level error for configuration and CLI operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown source format: {name}")]
    UnknownFormat { name: String },

    #[error("Unknown channel: {name}")]
    UnknownChannel { name: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Conversion worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Conversion(e) => e.kind(),
            _ => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
