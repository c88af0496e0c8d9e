//! Typed gateway to the hosted PostgREST data API.
//!
//! [`Gateway`] is the single request executor; [`DataService`] holds the
//! typed lookups and mutations built on top of it.

pub(crate) mod data_service;
pub(crate) mod decode;
pub(crate) mod error;
pub(crate) mod gateway;
pub(crate) mod outcome;
pub(crate) mod prefer;
pub(crate) mod query;

#[cfg(test)]
mod tests;

pub use data_service::DataService;
pub use error::{ClientError, Result as ClientResult};
pub use gateway::Gateway;
pub use outcome::{DefaultReason, Outcome};
pub use prefer::Prefer;
pub use query::Query;

pub use reqwest::Method;
