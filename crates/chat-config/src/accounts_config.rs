use crate::{ConfigError, ConfigErrorResult};

use chat_core::DEFAULT_AVATAR_URI;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Avatar for sign-ups without an image and for the empty profile
    pub default_avatar_uri: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            default_avatar_uri: String::from(DEFAULT_AVATAR_URI),
        }
    }
}

impl AccountsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_avatar_uri.trim().is_empty() {
            return Err(ConfigError::accounts(
                "accounts.default_avatar_uri cannot be empty",
            ));
        }

        Ok(())
    }
}
