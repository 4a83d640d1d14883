use crate::tests::sample_record;
use crate::{DEFAULT_AVATAR_URI, PHONE_NUMBER_NOT_PROVIDED, Profile};

use googletest::prelude::*;

#[test]
fn given_default_profile_then_fields_empty_and_placeholder_avatar() {
    let profile = Profile::default();

    assert_that!(profile.first_name, eq(""));
    assert_that!(profile.email, eq(""));
    assert_that!(profile.avatar_uri, eq(DEFAULT_AVATAR_URI));
}

#[test]
fn given_record_with_empty_avatar_when_profile_then_falls_back() {
    let record = sample_record("a@x.com", "p1").with_avatar_uri("");

    let profile = Profile::from_record(&record, "https://example.com/fallback.png");

    assert_that!(profile.avatar_uri, eq("https://example.com/fallback.png"));
    assert_that!(profile.email, eq("a@x.com"));
}

#[test]
fn given_record_with_avatar_when_profile_then_keeps_it() {
    let record = sample_record("a@x.com", "p1").with_avatar_uri("file:///me.png");

    let profile = Profile::from(&record);

    assert_that!(profile.avatar_uri, eq("file:///me.png"));
}

#[test]
fn given_profile_when_serialized_then_password_absent() {
    let record = sample_record("a@x.com", "hunter2");

    let json = serde_json::to_string(&Profile::from(&record)).unwrap();

    assert!(!json.contains("hunter2"));
    assert!(!json.contains("password"));
}

#[test]
fn given_record_with_empty_phone_when_profile_then_not_provided() {
    let mut record = sample_record("a@x.com", "p1");
    record.phone_number = String::new();

    let profile = Profile::from(&record);

    assert_that!(profile.phone_number, eq(PHONE_NUMBER_NOT_PROVIDED));
}

#[test]
fn given_record_with_phone_when_profile_then_keeps_it() {
    let record = sample_record("a@x.com", "p1");

    let profile = Profile::from(&record);

    assert_that!(profile.phone_number, eq("+44 7700900123"));
}
