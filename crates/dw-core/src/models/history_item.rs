use crate::de::null_as_default;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Read-side projection of a history row with the input type and output
/// format names embedded by the server.
///
/// Expects the projection
/// `id,input_type:input_file_type_id(name),output_format:output_format_id(name),...`
/// so that each embedded lookup arrives as `{"name": "..."}` (or `null`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub id: i64,
    #[serde(default, deserialize_with = "embedded_name")]
    pub input_type: String,
    #[serde(default, deserialize_with = "embedded_name")]
    pub output_format: String,
    #[serde(default)]
    pub process_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processing_time: Option<i32>,
    #[serde(default)]
    pub is_success: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub process_type: String,
}

#[derive(Deserialize)]
struct EmbeddedName {
    #[serde(default)]
    name: Option<String>,
}

fn embedded_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let embedded = Option::<EmbeddedName>::deserialize(deserializer)?;
    Ok(embedded.and_then(|e| e.name).unwrap_or_default())
}
