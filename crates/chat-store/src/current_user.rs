use chat_core::{Profile, UserRecord};

/// The account the profile surface treats as "current".
///
/// There is no session: the current user is whoever registered last,
/// independent of who most recently authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentUser {
    Registered(UserRecord),
    NoUserYet,
}

impl CurrentUser {
    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            Self::Registered(record) => Some(record),
            Self::NoUserYet => None,
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    /// Display view; an unset avatar falls back to `fallback_avatar_uri`.
    pub fn profile(&self, fallback_avatar_uri: &str) -> Profile {
        match self {
            Self::Registered(record) => Profile::from_record(record, fallback_avatar_uri),
            Self::NoUserYet => Profile::empty(fallback_avatar_uri),
        }
    }
}
