use crate::CliResult;

use dw_client::{DefaultReason, Outcome};

use serde::Serialize;
use serde_json::{Value, json};

/// Render a lookup result, keeping whether the value was defaulted and why.
pub(crate) fn outcome_json<T: Serialize>(outcome: Outcome<T>) -> CliResult<Value> {
    let rendered = match outcome {
        Outcome::Fetched(value) => json!({
            "value": serde_json::to_value(value)?,
            "defaulted": false,
        }),
        Outcome::Defaulted {
            value,
            reason: DefaultReason::Empty,
        } => json!({
            "value": serde_json::to_value(value)?,
            "defaulted": true,
        }),
        Outcome::Defaulted {
            value,
            reason: DefaultReason::Failed(error),
        } => json!({
            "value": serde_json::to_value(value)?,
            "defaulted": true,
            "error": error.to_string(),
        }),
    };

    Ok(rendered)
}

pub(crate) fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
