//! String formatting applied by the sign-up surface before a record is stored.
//!
//! Stored records keep phone numbers and birthdates as display strings, so the
//! format here is the persisted format.

use chrono::{Datelike, NaiveDate};

/// Formats a phone number as `+<callingCode> <localNumber>`.
///
/// A calling code that already carries a leading `+` is not prefixed twice.
pub fn format_phone_number(calling_code: &str, local_number: &str) -> String {
    let code = calling_code.trim_start_matches('+');
    format!("+{code} {local_number}")
}

/// Formats a birthdate as `day/month/year` without zero padding (`5/3/1990`).
pub fn format_date_of_birth(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
