use dw_client::ClientError;
use dw_core::CoreError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Account is disabled {location}")]
    AccountDisabled { location: ErrorLocation },

    #[error("Username or email already exists {location}")]
    AlreadyExists { location: ErrorLocation },

    #[error("Registration failed: {message} {location}")]
    RegistrationFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source} {location}")]
    InvalidInput {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote call failed: {source} {location}")]
    Remote {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_disabled() -> Self {
        AuthError::AccountDisabled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_exists() -> Self {
        AuthError::AlreadyExists {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn registration_failed<S: Into<String>>(message: S) -> Self {
        AuthError::RegistrationFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_hash<S: Into<String>>(message: S) -> Self {
        AuthError::PasswordHash {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short text suitable for showing to the person signing in.
    ///
    /// Unlike `Display`, this carries no call-site location.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { .. } => "Invalid username or password".to_string(),
            Self::AccountDisabled { .. } => "Account is disabled".to_string(),
            Self::AlreadyExists { .. } => "Username or email already exists".to_string(),
            Self::RegistrationFailed { message, .. } => format!("Registration failed: {}", message),
            Self::InvalidInput { source, .. } => match source {
                CoreError::Validation { field, message, .. } => format!("{} {}", field, message),
            },
            Self::PasswordHash { .. } => "Could not process password".to_string(),
            Self::Remote { source, .. } => match source.status() {
                Some(status) => format!("Authentication service error (status {})", status),
                None => "Could not reach the authentication service".to_string(),
            },
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        AuthError::InvalidInput {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for AuthError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        AuthError::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
