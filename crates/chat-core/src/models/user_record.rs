//! UserRecord entity - one registered account.

use crate::{
    CoreError, DATE_OF_BIRTH_PLACEHOLDER, DEFAULT_AVATAR_URI, RequiredField,
    Result as CoreErrorResult,
};

use serde::{Deserialize, Serialize};

/// A registered account as persisted under the `users` key.
///
/// Credentials are kept verbatim; the password is compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    /// Unique key, compared with exact (case-sensitive) equality
    pub email: String,
    pub password: String,
    /// Free-form display date, e.g. `5/3/1990`
    pub date_of_birth: String,
    /// Display form `+<callingCode> <localNumber>`
    pub phone_number: String,
    #[serde(default = "default_avatar_uri")]
    pub avatar_uri: String,
}

fn default_avatar_uri() -> String {
    String::from(DEFAULT_AVATAR_URI)
}

impl UserRecord {
    /// Create a record with the placeholder avatar
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        date_of_birth: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            date_of_birth: date_of_birth.into(),
            phone_number: phone_number.into(),
            avatar_uri: default_avatar_uri(),
        }
    }

    pub fn with_avatar_uri(mut self, avatar_uri: impl Into<String>) -> Self {
        self.avatar_uri = avatar_uri.into();
        self
    }

    /// Required fields that are empty, in sign-up form order.
    ///
    /// A birthdate still showing the picker placeholder counts as missing.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let checks = [
            (RequiredField::Email, self.email.is_empty()),
            (RequiredField::Password, self.password.is_empty()),
            (RequiredField::FirstName, self.first_name.is_empty()),
            (RequiredField::LastName, self.last_name.is_empty()),
            (
                RequiredField::DateOfBirth,
                self.date_of_birth.is_empty() || self.date_of_birth == DATE_OF_BIRTH_PLACEHOLDER,
            ),
            (RequiredField::PhoneNumber, self.phone_number.is_empty()),
        ];

        checks
            .into_iter()
            .filter_map(|(field, missing)| missing.then_some(field))
            .collect()
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::missing_fields(missing))
        }
    }

    /// Exact match on both email and password
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
