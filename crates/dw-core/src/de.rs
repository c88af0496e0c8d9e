//! Deserialize helpers for server rows.

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as `T::default()`.
///
/// `#[serde(default)]` alone only covers an absent key; the server sends
/// every selected nullable column, so pair the two.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
