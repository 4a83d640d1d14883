//! chat-cli library
//!
//! The sign-up, login and profile surfaces as plain functions over an
//! [`AccountStore`](chat_store::AccountStore), used by the `chat` binary.

pub mod error;
pub mod logger;
pub mod response;
pub mod surfaces;

#[cfg(test)]
mod tests;

pub use error::{CliError, Result as CliResult};
pub use response::Response;
pub use surfaces::{SignUpForm, list_accounts, login, profile, sign_up};
