use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::SlotId;

/// Library-wide error type for slotdirs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// User input rejected before any state change.
    #[error("{0}")]
    Validation(String),

    /// Chosen path cannot be bound: missing, not a directory, or not UTF-8.
    #[error("{reason}: {}", path.display())]
    InvalidPath { path: PathBuf, reason: &'static str },

    /// A previously bound directory has vanished; the slot was unbound.
    #[error("Folder for slot {slot} no longer exists or was moved: {}", path.display())]
    StaleBinding { slot: SlotId, path: PathBuf },

    /// Slot identifier is not a positive integer.
    #[error("Invalid slot identifier '{0}': must be a positive integer")]
    InvalidSlotId(String),

    /// No slot with the given identifier.
    #[error("Slot {0} not found")]
    SlotNotFound(SlotId),

    /// The configuration document could not be written.
    #[error("Failed to save slots to {}: {source}", path.display())]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration document could not be read or decoded.
    #[error("Failed to read slots from {}: {details}", path.display())]
    PersistenceRead { path: PathBuf, details: String },

    /// The platform file browser could not be launched.
    #[error("Could not open folder {}: {details}", path.display())]
    DirectoryOpen { path: PathBuf, details: String },

    /// Interactive prompt failed (no terminal, I/O error).
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub(crate) fn missing_directory(path: impl Into<PathBuf>) -> Self {
        AppError::InvalidPath {
            path: path.into(),
            reason: "Folder does not exist or is not a directory",
        }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::PersistenceWrite { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::Validation(_)
            | AppError::InvalidSlotId(_)
            | AppError::PersistenceRead { .. } => io::ErrorKind::InvalidInput,
            AppError::InvalidPath { .. }
            | AppError::StaleBinding { .. }
            | AppError::SlotNotFound(_) => io::ErrorKind::NotFound,
            AppError::DirectoryOpen { .. } | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
