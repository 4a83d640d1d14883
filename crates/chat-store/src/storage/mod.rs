pub mod error;
pub mod file_storage;
pub mod memory_storage;

use crate::storage::error::Result as StorageResult;

use std::sync::Arc;

use async_trait::async_trait;

/// Asynchronous string key-value storage, injected into [`AccountStore`].
///
/// `set_item` replaces the whole value or leaves the previous one untouched;
/// implementations must never leave a partially written value behind.
///
/// [`AccountStore`]: crate::AccountStore
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when nothing has been stored under `key`.
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

#[async_trait]
impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value).await
    }
}
