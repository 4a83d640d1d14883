#![allow(dead_code)]

pub mod failing_storage;
pub mod fixtures;

pub use failing_storage::FailingStorage;
pub use fixtures::{create_test_user, create_test_users};
