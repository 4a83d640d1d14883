use crate::tests::sample_record;
use crate::{CoreError, DATE_OF_BIRTH_PLACEHOLDER, DEFAULT_AVATAR_URI, RequiredField, UserRecord};

use googletest::prelude::*;

#[test]
fn test_user_record_new_uses_placeholder_avatar() {
    let record = sample_record("ada@example.com", "p1");

    assert_that!(record.avatar_uri, eq(DEFAULT_AVATAR_URI));
    assert_that!(record.email, eq("ada@example.com"));
    assert_that!(record.password, eq("p1"));
}

#[test]
fn given_fully_populated_record_when_validate_then_ok() {
    let record = sample_record("ada@example.com", "p1");

    assert_that!(record.validate(), ok(anything()));
}

#[test]
fn given_empty_avatar_when_validate_then_ok() {
    let record = sample_record("ada@example.com", "p1").with_avatar_uri("");

    assert_that!(record.validate(), ok(anything()));
}

#[test]
fn given_empty_email_and_password_when_validate_then_reports_both_fields() {
    let record = sample_record("", "");

    let result = record.validate();

    match result {
        Err(CoreError::MissingFields { fields, .. }) => {
            assert_that!(
                fields,
                elements_are![eq(&RequiredField::Email), eq(&RequiredField::Password)]
            );
        }
        other => panic!("Expected MissingFields, got {other:?}"),
    }
}

#[test]
fn given_birthdate_placeholder_when_missing_fields_then_date_of_birth_reported() {
    let mut record = sample_record("ada@example.com", "p1");
    record.date_of_birth = DATE_OF_BIRTH_PLACEHOLDER.to_string();

    assert_that!(
        record.missing_fields(),
        elements_are![eq(&RequiredField::DateOfBirth)]
    );
}

#[test]
fn given_every_field_empty_when_missing_fields_then_all_six_in_form_order() {
    let record = UserRecord::new("", "", "", "", "", "");

    assert_that!(
        record.missing_fields(),
        elements_are![
            eq(&RequiredField::Email),
            eq(&RequiredField::Password),
            eq(&RequiredField::FirstName),
            eq(&RequiredField::LastName),
            eq(&RequiredField::DateOfBirth),
            eq(&RequiredField::PhoneNumber),
        ]
    );
}

#[test]
fn given_missing_fields_error_when_displayed_then_lists_field_names() {
    let err = UserRecord::new("Ada", "", "ada@example.com", "p1", "", "+44 1")
        .validate()
        .unwrap_err();

    let message = err.to_string();
    assert_that!(message, contains_substring("lastName, dateOfBirth"));
}

#[test]
fn given_case_differs_when_matches_credentials_then_false() {
    let record = sample_record("ada@example.com", "Secret");

    assert!(record.matches_credentials("ada@example.com", "Secret"));
    assert!(!record.matches_credentials("Ada@example.com", "Secret"));
    assert!(!record.matches_credentials("ada@example.com", "secret"));
    assert!(!record.matches_credentials(" ada@example.com", "Secret"));
}

#[test]
fn given_record_when_serialized_then_uses_camel_case_field_names() {
    let record = sample_record("ada@example.com", "p1");

    let json = serde_json::to_value(&record).unwrap();

    for key in [
        "firstName",
        "lastName",
        "email",
        "password",
        "dateOfBirth",
        "phoneNumber",
        "avatarUri",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn given_json_without_avatar_when_deserialized_then_defaults_to_placeholder() {
    let json = r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","password":"p1","dateOfBirth":"10/12/1815","phoneNumber":"+44 1"}"#;

    let record: UserRecord = serde_json::from_str(json).unwrap();

    assert_that!(record.avatar_uri, eq(DEFAULT_AVATAR_URI));
}
