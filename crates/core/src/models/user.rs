//! Backoffice user record and role ids.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::types::DbId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email: String,
    /// Never sent back by a well-behaved backend; accepted when present.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub role_id: Role,
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role. The backend stores it as `role_id` (1 = admin, 2 = regular).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    #[default]
    Regular,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Regular];

    pub fn id(self) -> DbId {
        match self {
            Role::Admin => 1,
            Role::Regular => 2,
        }
    }

    pub fn from_id(id: DbId) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Regular),
            _ => None,
        }
    }

    /// Value submitted by the role select box.
    pub fn form_value(self) -> &'static str {
        match self {
            Role::Admin => "1",
            Role::Regular => "2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Regular => "Regular",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a role name or id is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown role '{0}', expected admin or regular")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Accepts the role name (`admin`, `regular`) or its id (`1`, `2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "admin" | "administrator" => Ok(Role::Admin),
            "regular" => Ok(Role::Regular),
            other => other
                .parse::<DbId>()
                .ok()
                .and_then(Role::from_id)
                .ok_or_else(|| ParseRoleError(trimmed.to_string())),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.form_value())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRole {
            Id(DbId),
            Text(String),
        }

        let id = match RawRole::deserialize(deserializer)? {
            RawRole::Id(id) => id,
            RawRole::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid role id '{text}'")))?,
        };
        Role::from_id(id).ok_or_else(|| de::Error::custom(format!("unknown role id {id}")))
    }
}
