use chat_core::UserRecord;

/// Result of a credential lookup. `NoMatch` is an expected answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(UserRecord),
    NoMatch,
}

impl AuthOutcome {
    /// Shown on `NoMatch`; deliberately does not say which field was wrong.
    pub const NO_MATCH_MESSAGE: &'static str = "Invalid email or password";

    pub const SUCCESS_MESSAGE: &'static str = "You are successfully logged in!";

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            Self::Authenticated(record) => Some(record),
            Self::NoMatch => None,
        }
    }

    pub fn into_record(self) -> Option<UserRecord> {
        match self {
            Self::Authenticated(record) => Some(record),
            Self::NoMatch => None,
        }
    }
}
