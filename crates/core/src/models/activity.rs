use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// An activity published on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: DbId,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Encoded image (data URL or remote URL); `None` when unset.
    #[serde(default)]
    pub image: Option<String>,
}
