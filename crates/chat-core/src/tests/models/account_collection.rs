use crate::tests::sample_record;
use crate::{AccountCollection, CoreError};

use googletest::prelude::*;

#[test]
fn given_empty_array_when_from_json_then_empty_collection() {
    let collection = AccountCollection::from_json("[]").unwrap();

    assert!(collection.is_empty());
    assert_that!(collection.last(), none());
}

#[test]
fn given_collection_when_encoded_and_decoded_then_records_equal_in_order() {
    let collection = AccountCollection::from(vec![
        sample_record("a@x.com", "p1"),
        sample_record("b@x.com", "p2").with_avatar_uri("file:///avatar.png"),
    ]);

    let json = collection.to_json().unwrap();
    let restored = AccountCollection::from_json(&json).unwrap();

    assert_that!(restored, eq(&collection));
}

#[test]
fn given_collection_when_encoded_then_is_json_array_of_objects() {
    let collection = AccountCollection::from(vec![sample_record("a@x.com", "p1")]);

    let json = collection.to_json().unwrap();

    assert!(json.starts_with("[{"));
    assert_that!(json, contains_substring(r#""email":"a@x.com""#));
}

#[test]
fn given_malformed_json_when_from_json_then_decode_error() {
    let result = AccountCollection::from_json("{not json");

    assert!(matches!(result, Err(CoreError::Decode { .. })));
}

#[test]
fn given_duplicate_emails_with_different_passwords_when_find_by_credentials_then_first_match() {
    let collection = AccountCollection::from(vec![
        sample_record("a@x.com", "p1"),
        sample_record("b@x.com", "p2"),
    ]);

    let found = collection.find_by_credentials("b@x.com", "p2");

    assert_that!(found.map(|r| r.email.as_str()), some(eq("b@x.com")));
    assert_that!(collection.find_by_credentials("b@x.com", "p1"), none());
}

#[test]
fn given_records_when_last_then_most_recently_pushed() {
    let mut collection = AccountCollection::new();
    collection.push(sample_record("a@x.com", "p1"));
    collection.push(sample_record("b@x.com", "p2"));

    assert_that!(collection.len(), eq(2));
    assert_that!(collection.last().map(|r| r.email.as_str()), some(eq("b@x.com")));
}

#[test]
fn given_email_in_other_case_when_contains_email_then_false() {
    let collection = AccountCollection::from(vec![sample_record("a@x.com", "p1")]);

    assert!(collection.contains_email("a@x.com"));
    assert!(!collection.contains_email("A@X.COM"));
}
