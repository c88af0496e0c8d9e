use crate::de::null_as_default;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the remote `users` table.
///
/// The `password` column stores a PHC-format Argon2id hash. It is read for
/// verification but never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(
        rename = "password",
        default,
        deserialize_with = "null_as_default",
        skip_serializing
    )]
    pub password_hash: String,
    #[serde(default)]
    pub full_name: Option<String>,

    // Audit
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Insert payload for a new `users` row.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        full_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            full_name: full_name.unwrap_or_default(),
            created_at: Utc::now(),
            is_active: true,
        }
    }
}
