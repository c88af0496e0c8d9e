use crate::{ClientError, ClientResult};

/// Why a lookup handed back its default value.
#[derive(Debug)]
pub enum DefaultReason {
    /// The call succeeded but matched no rows
    Empty,
    /// The call failed; the error is kept for the caller
    Failed(ClientError),
}

/// Result of a lookup that always yields a usable value.
///
/// Lookups never fail past their own boundary: on an empty result or a
/// failed call they return a documented default, tagged with the reason, so
/// callers can still tell "nothing there" apart from "could not ask".
#[derive(Debug)]
pub enum Outcome<T> {
    Fetched(T),
    Defaulted { value: T, reason: DefaultReason },
}

impl<T> Outcome<T> {
    /// Lists: any successful response counts as fetched, even an empty one.
    pub(crate) fn from_list(result: ClientResult<T>, default: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Outcome::Fetched(value),
            Err(error) => Outcome::Defaulted {
                value: default(),
                reason: DefaultReason::Failed(error),
            },
        }
    }

    /// Single values: no row and a failed call both fall back to `default`.
    pub(crate) fn from_optional(
        result: ClientResult<Option<T>>,
        default: impl FnOnce() -> T,
    ) -> Self {
        match result {
            Ok(Some(value)) => Outcome::Fetched(value),
            Ok(None) => Outcome::Defaulted {
                value: default(),
                reason: DefaultReason::Empty,
            },
            Err(error) => Outcome::Defaulted {
                value: default(),
                reason: DefaultReason::Failed(error),
            },
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Fetched(value) | Outcome::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Fetched(value) | Outcome::Defaulted { value, .. } => value,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Outcome::Fetched(_))
    }

    pub fn is_defaulted(&self) -> bool {
        !self.is_fetched()
    }

    /// The failure behind a defaulted value, if any
    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Outcome::Defaulted {
                reason: DefaultReason::Failed(error),
                ..
            } => Some(error),
            _ => None,
        }
    }
}
