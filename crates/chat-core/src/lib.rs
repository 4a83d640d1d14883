pub mod error;
pub mod formatting;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use formatting::{format_date_of_birth, format_phone_number};
pub use models::account_collection::AccountCollection;
pub use models::profile::Profile;
pub use models::required_field::RequiredField;
pub use models::user_record::UserRecord;

/// Avatar shown for accounts that never picked an image.
pub const DEFAULT_AVATAR_URI: &str =
    "https://www.pngkey.com/png/detail/115-1150152_default-profile-picture-avatar-png-green.png";

/// Label the sign-up surface shows until a birthdate is picked.
pub const DATE_OF_BIRTH_PLACEHOLDER: &str = "Pick Birthdate";

/// Shown on a stored profile whose phone number is empty.
pub const PHONE_NUMBER_NOT_PROVIDED: &str = "Not provided";

/// Storage key holding the serialized account collection.
pub const USERS_KEY: &str = "users";
