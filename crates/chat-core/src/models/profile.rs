use crate::{DEFAULT_AVATAR_URI, PHONE_NUMBER_NOT_PROVIDED, UserRecord};

use serde::Serialize;

/// What the profile surface displays. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub avatar_uri: String,
}

impl Profile {
    /// Profile shown before anyone has registered.
    pub fn empty(fallback_avatar_uri: &str) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            date_of_birth: String::new(),
            phone_number: String::new(),
            avatar_uri: fallback_avatar_uri.to_string(),
        }
    }

    /// Build from a stored record. An empty avatar falls back to
    /// `fallback_avatar_uri` and an empty phone number reads "Not provided".
    pub fn from_record(record: &UserRecord, fallback_avatar_uri: &str) -> Self {
        let avatar_uri = if record.avatar_uri.is_empty() {
            fallback_avatar_uri.to_string()
        } else {
            record.avatar_uri.clone()
        };

        let phone_number = if record.phone_number.is_empty() {
            String::from(PHONE_NUMBER_NOT_PROVIDED)
        } else {
            record.phone_number.clone()
        };

        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            date_of_birth: record.date_of_birth.clone(),
            phone_number,
            avatar_uri,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::empty(DEFAULT_AVATAR_URI)
    }
}

impl From<&UserRecord> for Profile {
    fn from(record: &UserRecord) -> Self {
        Self::from_record(record, DEFAULT_AVATAR_URI)
    }
}
