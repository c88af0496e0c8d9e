use crate::credentials::{validate_email, validate_password, validate_username};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_plain_username_when_validated_then_ok() {
    assert_that!(validate_username("alice"), ok(anything()));
}

#[test]
fn given_blank_username_when_validated_then_error_names_field() {
    let result = validate_username("   ");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().field(), eq("username"));
}

#[test]
fn given_padded_username_when_validated_then_error() {
    assert_that!(validate_username(" alice"), err(anything()));
}

#[test]
fn given_overlong_username_when_validated_then_error() {
    let name = "a".repeat(65);
    assert_that!(validate_username(&name), err(anything()));
}

#[test]
fn given_empty_password_when_validated_then_error() {
    assert_that!(validate_password(""), err(anything()));
    assert_that!(validate_password("pw1"), ok(anything()));
}

#[test]
fn given_email_without_domain_when_validated_then_error() {
    assert_that!(validate_email("a@"), err(anything()));
    assert_that!(validate_email("@x.com"), err(anything()));
    assert_that!(validate_email("ax.com"), err(anything()));
}

#[test]
fn given_well_formed_email_when_validated_then_ok() {
    assert_that!(validate_email("a@x.com"), ok(anything()));
}
