use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by a [`KeyValueStorage`](crate::KeyValueStorage) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key {key:?}: {message} {location}")]
    InvalidKey {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read storage file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write storage file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to backup corrupted file {path}: {source} {location}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Storage unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    /// Whether trying the same operation again may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::AtomicRename { .. }
                | Self::Unavailable { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => {
                "Internal error addressing local storage. \
                   Please report this issue."
            }
            Self::DirCreation { .. } | Self::FileWrite { .. } => {
                "Unable to write to the storage directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read account data. \
                   The file may be locked by another process."
            }
            Self::AtomicRename { .. } => {
                "Unable to save account data safely. \
                   Check disk space and try again."
            }
            Self::BackupFailed { .. } => {
                "Unable to backup corrupted account data. \
                   Check file permissions in the storage directory."
            }
            Self::Unavailable { .. } => "Local storage is unavailable. Try again later.",
        }
    }

    #[track_caller]
    pub fn invalid_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backup_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::BackupFailed {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
