use crate::de::null_as_default;

use serde::{Deserialize, Serialize};

/// Id/name row of a reference table (`file_types`, `output_formats`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupRow {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}
