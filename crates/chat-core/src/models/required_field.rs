use std::fmt;

/// Registration fields that must be filled before an account is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Email,
    Password,
    FirstName,
    LastName,
    DateOfBirth,
    PhoneNumber,
}

impl RequiredField {
    /// Persisted (camelCase) field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfBirth => "dateOfBirth",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
