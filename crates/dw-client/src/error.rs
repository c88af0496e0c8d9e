use error_location::ErrorLocation;
use serde_json::Value;
use std::panic::Location;
use thiserror::Error;

/// PostgreSQL `unique_violation`, surfaced by PostgREST in the `code` field
const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Errors that can occur during gateway calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Remote call failed with status {status}: {body} {location}")]
    RemoteCallFailed {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("No rows found for {resource} {location}")]
    NotFound {
        resource: String,
        location: ErrorLocation,
    },

    #[error("Duplicate conflict (status {status}): {body} {location}")]
    DuplicateConflict {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("JSON decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid client configuration: {message} {location}")]
    InvalidConfig {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Classify a non-success response.
    ///
    /// A unique violation is recognised by the PostgREST error code, or by the
    /// word "duplicate" in the body for servers that only send a message.
    #[track_caller]
    pub fn from_response(status: u16, body: String) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if is_duplicate(&body) {
            ClientError::DuplicateConflict {
                status,
                body,
                location,
            }
        } else {
            ClientError::RemoteCallFailed {
                status,
                body,
                location,
            }
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        ClientError::NotFound {
            resource: resource.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidConfig {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of a rejected call
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteCallFailed { status, .. } | Self::DuplicateConflict { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Response body text of a rejected call
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::RemoteCallFailed { body, .. } | Self::DuplicateConflict { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateConflict { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

fn is_duplicate(body: &str) -> bool {
    let code_matches = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("code").and_then(Value::as_str).map(str::to_owned))
        .is_some_and(|code| code == UNIQUE_VIOLATION_CODE);

    code_matches || body.contains("duplicate")
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
