//! AccountCollection - the full ordered set of accounts, the only persisted entity.
//!
//! The collection is always read and written as a whole document. Order is
//! registration order and the last element is the "current" user.

use crate::{CoreError, Result as CoreErrorResult, UserRecord};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCollection {
    records: Vec<UserRecord>,
}

impl AccountCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the persisted JSON array.
    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        serde_json::from_str(json).map_err(CoreError::decode)
    }

    /// Encode as the compact JSON array written to storage.
    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        serde_json::to_string(self).map_err(CoreError::encode)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.records.iter().any(|r| r.email == email)
    }

    /// First record in registration order whose email and password both match.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&UserRecord> {
        self.records
            .iter()
            .find(|r| r.matches_credentials(email, password))
    }

    /// Most recently registered record
    pub fn last(&self) -> Option<&UserRecord> {
        self.records.last()
    }

    /// Append without any uniqueness check; callers enforce the email invariant.
    pub fn push(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<UserRecord> {
        self.records
    }
}

impl From<Vec<UserRecord>> for AccountCollection {
    fn from(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a AccountCollection {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
