use crate::{NewUser, User};

use serde_json::json;

#[test]
fn test_new_user_defaults() {
    let user = NewUser::new(
        "alice".to_string(),
        "a@x.com".to_string(),
        "$argon2id$stub".to_string(),
        None,
    );

    assert_eq!(user.username, "alice");
    assert_eq!(user.full_name, "");
    assert!(user.is_active);
}

#[test]
fn test_new_user_serializes_hash_into_password_column() {
    let user = NewUser::new(
        "alice".to_string(),
        "a@x.com".to_string(),
        "$argon2id$stub".to_string(),
        Some("Alice".to_string()),
    );

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["password"], "$argon2id$stub");
    assert_eq!(value["full_name"], "Alice");
    assert!(value.get("password_hash").is_none());
}

#[test]
fn test_user_row_missing_optional_fields_defaults() {
    let user: User = serde_json::from_value(json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "username": "alice"
    }))
    .unwrap();

    assert_eq!(user.email, "");
    assert_eq!(user.password_hash, "");
    assert!(user.last_login_at.is_none());
    assert!(user.is_active);
}

#[test]
fn test_user_serialization_omits_password() {
    let user: User = serde_json::from_value(json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "username": "alice",
        "password": "$argon2id$secret"
    }))
    .unwrap();

    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("password").is_none());
    assert_eq!(value["username"], "alice");
}

#[test]
fn test_user_row_null_email_becomes_empty() {
    let user: User = serde_json::from_value(json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "username": "alice",
        "email": null,
        "password": null
    }))
    .unwrap();

    assert_eq!(user.email, "");
    assert_eq!(user.password_hash, "");
}
