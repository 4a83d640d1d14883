//! Sign-up, login and profile surfaces.
//!
//! Each surface calls the account store once and turns the result into the
//! alert the user sees. Store failures are logged and never propagated.

use crate::Response;

use chat_core::{
    DATE_OF_BIRTH_PLACEHOLDER, Profile, UserRecord, format_date_of_birth, format_phone_number,
};
use chat_store::{AccountStore, AuthOutcome, KeyValueStorage, Operation, StoreError};

use chrono::NaiveDate;
use log::{error, info};

const TITLE_SUCCESS: &str = "Success";
const TITLE_ERROR: &str = "Error";
const TITLE_LOGIN_SUCCESS: &str = "Login Success";
const TITLE_LOGIN_FAILED: &str = "Login Failed";
const TITLE_PROFILE: &str = "Profile";
const TITLE_ACCOUNTS: &str = "Accounts";

const REGISTRATION_SUCCESSFUL: &str = "Registration successful";

/// Raw sign-up input, before phone and birthdate are formatted.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// `None` until a date is picked
    pub birthdate: Option<NaiveDate>,
    pub calling_code: String,
    pub phone: String,
    pub avatar_uri: Option<String>,
}

impl SignUpForm {
    /// Builds the record to store. An unpicked birthdate keeps the placeholder
    /// label and an empty local number stays empty, so validation rejects both.
    pub fn into_record(self, default_avatar_uri: &str) -> UserRecord {
        let date_of_birth = self.birthdate.map_or_else(
            || DATE_OF_BIRTH_PLACEHOLDER.to_string(),
            format_date_of_birth,
        );

        let phone_number = if self.phone.is_empty() {
            String::new()
        } else {
            format_phone_number(&self.calling_code, &self.phone)
        };

        UserRecord::new(
            self.first_name,
            self.last_name,
            self.email,
            self.password,
            date_of_birth,
            phone_number,
        )
        .with_avatar_uri(
            self.avatar_uri
                .unwrap_or_else(|| default_avatar_uri.to_string()),
        )
    }
}

pub async fn sign_up<S: KeyValueStorage>(
    store: &AccountStore<S>,
    form: SignUpForm,
    default_avatar_uri: &str,
) -> Response {
    let record = form.into_record(default_avatar_uri);

    match store.register(record).await {
        Ok(()) => {
            info!("Sign-up completed");
            Response::success(TITLE_SUCCESS, REGISTRATION_SUCCESSFUL)
        }
        Err(e) => failure(&e, Operation::Register),
    }
}

pub async fn login<S: KeyValueStorage>(
    store: &AccountStore<S>,
    email: &str,
    password: &str,
) -> Response {
    match store.authenticate(email, password).await {
        Ok(AuthOutcome::Authenticated(_)) => {
            Response::success(TITLE_LOGIN_SUCCESS, AuthOutcome::SUCCESS_MESSAGE)
        }
        Ok(AuthOutcome::NoMatch) => {
            Response::failure(TITLE_LOGIN_FAILED, AuthOutcome::NO_MATCH_MESSAGE)
        }
        Err(e) => failure(&e, Operation::Authenticate),
    }
}

/// Shows the most recently registered account, or an empty profile.
pub async fn profile<S: KeyValueStorage>(
    store: &AccountStore<S>,
    default_avatar_uri: &str,
) -> Response {
    match store.current_user().await {
        Ok(current) => {
            let profile = current.profile(default_avatar_uri);
            let message = if current.is_registered() {
                format!("{} {}", profile.first_name, profile.last_name)
            } else {
                String::from("No user yet")
            };
            to_data_response(TITLE_PROFILE, message, &profile)
        }
        Err(e) => failure(&e, Operation::LoadProfile),
    }
}

/// Every stored account as profiles, in registration order. Passwords are not shown.
pub async fn list_accounts<S: KeyValueStorage>(
    store: &AccountStore<S>,
    default_avatar_uri: &str,
) -> Response {
    match store.load().await {
        Ok(accounts) => {
            let profiles: Vec<Profile> = accounts
                .iter()
                .map(|r| Profile::from_record(r, default_avatar_uri))
                .collect();
            let message = format!("{} account(s)", profiles.len());
            to_data_response(TITLE_ACCOUNTS, message, &profiles)
        }
        Err(e) => failure(&e, Operation::LoadProfile),
    }
}

fn to_data_response<T: serde::Serialize>(
    title: &'static str,
    message: String,
    data: &T,
) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => Response::success(title, message).with_data(value),
        Err(e) => {
            error!("Failed to serialize {title}: {e}");
            Response::failure(TITLE_ERROR, "Failed to load user data")
        }
    }
}

/// Alert for a failed store call. Storage failures carry the recovery hint.
fn failure(e: &StoreError, operation: Operation) -> Response {
    error!(
        "{operation:?} failed (transient: {}): {e}",
        e.is_transient()
    );

    let message = match e.recovery_hint() {
        Some(hint) => format!("{}. {hint}", e.user_message(operation)),
        None => e.user_message(operation).to_string(),
    };
    Response::failure(TITLE_ERROR, message)
}
