use crate::ClientResult;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response body into `T` with case-insensitive field matching.
///
/// Object keys are lower-cased before deserialization, so records declare
/// their fields in lower snake case. An empty body decodes as `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body)?
    };

    Ok(serde_json::from_value(lowercase_keys(value))?)
}

/// Recursively lower-case every object key.
pub(crate) fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
