use crate::de::null_as_default;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the remote `history` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub user_id: Uuid,
    pub input_file_type_id: i64,
    pub output_format_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub process_type: String,
    #[serde(default)]
    pub process_date: Option<DateTime<Utc>>,
    /// Milliseconds, patched in once processing finishes
    #[serde(default)]
    pub processing_time: Option<i32>,
    #[serde(default)]
    pub is_success: Option<bool>,
}

/// Insert payload written at the start of a processing run.
#[derive(Debug, Clone, Serialize)]
pub struct NewHistoryRecord {
    pub user_id: Uuid,
    pub input_file_type_id: i64,
    pub output_format_id: i64,
    pub prompt_text: String,
    pub process_type: String,
}

impl NewHistoryRecord {
    pub fn new(
        user_id: Uuid,
        input_file_type_id: i64,
        output_format_id: i64,
        prompt_text: String,
        process_type: String,
    ) -> Self {
        Self {
            user_id,
            input_file_type_id,
            output_format_id,
            prompt_text,
            process_type,
        }
    }
}
