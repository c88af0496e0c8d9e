use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row per user in `user_preferences`, upserted on `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreference {
    pub user_id: Uuid,
    pub format: String,
}

impl UserPreference {
    pub fn new(user_id: Uuid, format: String) -> Self {
        Self { user_id, format }
    }
}
