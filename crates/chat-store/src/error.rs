use crate::StorageError;

use chat_core::{CoreError, RequiredField};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure classes surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountErrorKind {
    /// Reading or writing the persisted collection failed
    StorageUnavailable,
    /// Sign-up reused an email that is already registered
    DuplicateEmail,
    /// Required registration fields were empty
    InvalidInput,
}

/// The account operation that failed; picks the generic failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Authenticate,
    LoadProfile,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Stored accounts under {key:?} are corrupted: {source} {location}")]
    Corrupted {
        key: &'static str,
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Failed to encode accounts: {source} {location}")]
    Encode {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid registration: {source} {location}")]
    InvalidInput {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl StoreError {
    pub fn kind(&self) -> AccountErrorKind {
        match self {
            Self::Storage { .. } | Self::Corrupted { .. } | Self::Encode { .. } => {
                AccountErrorKind::StorageUnavailable
            }
            Self::DuplicateEmail { .. } => AccountErrorKind::DuplicateEmail,
            Self::InvalidInput { .. } => AccountErrorKind::InvalidInput,
        }
    }

    /// Whether the user may succeed by simply trying again.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage { source, .. } => source.is_transient(),
            _ => false,
        }
    }

    /// What the user can do about a storage failure; `None` for other errors.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Storage { source, .. } => Some(source.recovery_hint()),
            _ => None,
        }
    }

    /// Fields the user still has to fill in, empty for other errors.
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            Self::InvalidInput {
                source: CoreError::MissingFields { fields, .. },
                ..
            } => fields,
            _ => &[],
        }
    }

    /// Alert text shown to the user.
    pub fn user_message(&self, operation: Operation) -> &'static str {
        match self.kind() {
            AccountErrorKind::DuplicateEmail => "Email already exists",
            AccountErrorKind::InvalidInput => "Please fill in all fields",
            AccountErrorKind::StorageUnavailable => match operation {
                Operation::Register => "Failed to register user",
                Operation::Authenticate => "An error occurred during login",
                Operation::LoadProfile => "Failed to load user data",
            },
        }
    }

    #[track_caller]
    pub fn corrupted(key: &'static str, source: CoreError) -> Self {
        Self::Corrupted {
            key,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode(source: CoreError) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input(source: CoreError) -> Self {
        Self::InvalidInput {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for StoreError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
