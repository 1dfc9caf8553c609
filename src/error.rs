//! Error types for Renum

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the load, plan and execute stages
#[derive(Debug, Error)]
pub enum RenumError {
    /// The folder could not be listed (missing, not a directory, or no permission)
    #[error("Cannot access folder {}: {source}", .path.display())]
    FolderAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Preview or execute requested with no files loaded
    #[error("Nothing to rename: no files are loaded")]
    EmptyInput,

    /// Execute requested before a preview was built
    #[error("Nothing to apply: build a preview first")]
    NoPreview,

    /// Prefix contains a path separator or NUL
    #[error("Invalid prefix {0:?}: must not contain path separators")]
    InvalidPrefix(String),

    /// Two entries of one plan would end up with the same name
    #[error("Planned name '{target}' is claimed by both '{first}' and '{second}'")]
    RenameCollision {
        target: String,
        first: String,
        second: String,
    },

    /// A rename failed part-way through a batch
    #[error(
        "Renaming entry {} ({} -> {}) failed after {succeeded} succeeded: {error}",
        .index + 1,
        .from.display(),
        .to.display()
    )]
    RenameExecution {
        /// Zero-based index of the failing entry
        index: usize,
        from: PathBuf,
        to: PathBuf,
        succeeded: usize,
        error: io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RenumError {
    /// Whether the error is a prompt for the user rather than a failure
    pub fn is_informational(&self) -> bool {
        matches!(self, RenumError::EmptyInput | RenumError::NoPreview)
    }
}

pub type Result<T> = std::result::Result<T, RenumError>;
