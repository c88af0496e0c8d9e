use crate::{AuthError, hash_password, verify_password};

use googletest::prelude::*;

#[test]
fn given_hashed_password_when_verified_with_same_password_then_matches() {
    let hash = hash_password("pw1").unwrap();

    assert_that!(verify_password("pw1", &hash).unwrap(), eq(true));
}

#[test]
fn given_hashed_password_when_verified_with_other_password_then_no_match() {
    let hash = hash_password("pw1").unwrap();

    assert_that!(verify_password("wrong", &hash).unwrap(), eq(false));
}

#[test]
fn given_password_when_hashed_then_phc_argon2id_string() {
    let hash = hash_password("pw1").unwrap();

    assert_that!(hash, starts_with("$argon2id$"));
    assert_that!(hash, not(contains_substring("pw1")));
}

#[test]
fn given_same_password_when_hashed_twice_then_salts_differ() {
    let first = hash_password("pw1").unwrap();
    let second = hash_password("pw1").unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_plaintext_stored_value_when_verified_then_password_hash_error() {
    let result = verify_password("pw1", "pw1");

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}
