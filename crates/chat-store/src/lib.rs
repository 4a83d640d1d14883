//! Local account store: the persisted `users` collection and the
//! register / authenticate / current-user operations built on it.

pub mod account_store;
pub mod auth_outcome;
pub mod current_user;
pub mod error;
pub mod storage;

#[cfg(test)]
mod tests;

pub use account_store::AccountStore;
pub use auth_outcome::AuthOutcome;
pub use current_user::CurrentUser;
pub use error::{AccountErrorKind, Operation, Result, StoreError};
pub use storage::{
    KeyValueStorage,
    error::{Result as StorageResult, StorageError},
    file_storage::FileStorage,
    memory_storage::MemoryStorage,
};
