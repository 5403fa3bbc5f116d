//! Entity records as returned by the backend.
//!
//! The backend owns these; the forms only hold a copy for one session.

use serde::{Deserialize, Deserializer};

pub mod activity;
pub mod category;
pub mod user;

pub use activity::Activity;
pub use category::Category;
pub use user::{ParseRoleError, Role, User};

/// Reads a JSON `null` as the field's default. Backends store empty text
/// columns as `NULL`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
