use crate::Response;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_alert_response_when_render_then_title_and_message() {
    let response = Response::failure("Login Failed", "Invalid email or password");

    assert_that!(
        response.render(false),
        eq("Login Failed: Invalid email or password")
    );
}

#[test]
fn given_data_response_when_render_compact_then_json_only() {
    let response = Response::success("Profile", "Ada").with_data(json!({"email": "a@x.com"}));

    assert_that!(response.render(false), eq(r#"{"email":"a@x.com"}"#));
}

#[test]
fn given_data_response_when_render_pretty_then_multiline_json() {
    let response = Response::success("Profile", "Ada").with_data(json!({"email": "a@x.com"}));

    assert_that!(response.render(true), contains_substring("\n"));
}
