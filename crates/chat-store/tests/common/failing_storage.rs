use chat_store::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

/// Memory-backed storage whose reads and writes can be switched to fail.
#[derive(Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStorage for FailingStorage {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("read failure injected"));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("write failure injected"));
        }
        self.inner.set_item(key, value).await
    }
}
