#![allow(dead_code)]

use dw_auth::{Authenticator, hash_password};
use dw_client::Gateway;
use dw_config::ClientConfig;

use serde_json::{Value, json};

pub const API_KEY: &str = "test-anon-key";
pub const USER_ID: &str = "00000000-0000-0000-0000-0000000000b2";

pub fn create_test_authenticator(uri: &str) -> Authenticator {
    let gateway = Gateway::new(uri, "rest/v1", API_KEY, API_KEY, &ClientConfig::default()).unwrap();
    Authenticator::new(gateway)
}

/// A `users` row as the server returns it, with a real Argon2id hash
pub fn user_row(username: &str, password: &str, is_active: bool) -> Value {
    json!({
        "id": USER_ID,
        "username": username,
        "email": format!("{}@example.com", username),
        "password": hash_password(password).unwrap(),
        "full_name": null,
        "created_at": "2024-01-15T08:30:00+00:00",
        "last_login_at": null,
        "is_active": is_active
    })
}
