//! Row models, input DTOs and nested projections.
//!
//! Row structs map one-to-one onto table columns and serialize every column,
//! foreign keys included. Nested views are declared explicitly per entity so
//! the wire shape never depends on what happens to be loaded.

pub mod assignment;
pub mod comment;
pub mod project;
pub mod task;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize an update field where explicit `null` differs from absent.
///
/// Pair with `#[serde(default)]`: an absent key stays `None`, `null` becomes
/// `Some(None)` and clears the column, a value becomes `Some(Some(v))`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
