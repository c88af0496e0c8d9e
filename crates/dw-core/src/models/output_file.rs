use crate::de::null_as_default;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the remote `output_files` table. Written once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFile {
    pub id: i64,
    #[serde(default)]
    pub history_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Bytes
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOutputFile {
    pub history_id: i64,
    pub name: String,
    pub path: String,
    pub size: i64,
}

impl NewOutputFile {
    pub fn new(history_id: i64, name: String, path: String, size: i64) -> Self {
        Self {
            history_id,
            name,
            path,
            size,
        }
    }
}
