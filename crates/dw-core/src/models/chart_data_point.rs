use crate::de::null_as_default;

use serde::{Deserialize, Serialize};

/// One bar of the file-type usage chart, as returned by the stats procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: i64,
}
