use crate::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};

use std::path::Path;
use std::sync::Arc;

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_memory_storage_when_get_item_then_none() {
    let storage = MemoryStorage::new();

    let value = storage.get_item("users").await.unwrap();

    assert_that!(value, none());
}

#[tokio::test]
async fn given_memory_storage_when_set_twice_then_last_value_wins() {
    let storage = MemoryStorage::new();

    storage.set_item("users", "[1]").await.unwrap();
    storage.set_item("users", "[2]").await.unwrap();

    assert_that!(
        storage.get_item("users").await.unwrap(),
        some(eq("[2]"))
    );
}

#[tokio::test]
async fn given_shared_storage_when_written_through_arc_then_visible_to_all_handles() {
    let storage = Arc::new(MemoryStorage::with_item("users", "[]"));
    let handle = Arc::clone(&storage);

    handle.set_item("users", "[{}]").await.unwrap();

    assert_that!(
        storage.get_item("users").await.unwrap(),
        some(eq("[{}]"))
    );
}

#[test]
fn given_plain_key_when_path_for_then_json_file_in_dir() {
    let storage = FileStorage::new("/var/data");

    let path = storage.path_for("users").unwrap();

    assert_that!(path.as_path(), eq(Path::new("/var/data/users.json")));
}

#[test]
fn given_key_with_separator_when_path_for_then_invalid_key() {
    let storage = FileStorage::new("/var/data");

    let result = storage.path_for("../users");

    assert!(matches!(result, Err(StorageError::InvalidKey { .. })));
}

#[test]
fn given_empty_key_when_path_for_then_invalid_key() {
    let storage = FileStorage::new("/var/data");

    assert!(matches!(
        storage.path_for(""),
        Err(StorageError::InvalidKey { .. })
    ));
}
