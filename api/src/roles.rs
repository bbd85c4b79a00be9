//! # Role enumeration
//!
//! The backend tags every user with one of four roles. This module keeps
//! that set closed: parsing accepts exactly the tags the backend emits
//! (`administrator`, `enseignant`, `famille`, `child`) and anything else
//! is an [`UnknownRole`] error rather than a silent fallback. Callers
//! that want a guest view for an absent or unrecognized role make that
//! choice themselves with an `Option<Role>`.
//!
//! Serde goes through the same tags, so a `User` payload with a role the
//! enum does not know fails to deserialize instead of slipping through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a role tag is not one of the four known values.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown role tag: {0:?}")]
pub struct UnknownRole(pub String);

/// A user's role, as issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "administrator")]
    Administrator,
    #[serde(rename = "enseignant")]
    Teacher,
    #[serde(rename = "famille")]
    Family,
    #[serde(rename = "child")]
    Student,
}

impl Role {
    /// The backend's tag for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Teacher => "enseignant",
            Role::Family => "famille",
            Role::Student => "child",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "administrator" => Ok(Role::Administrator),
            "enseignant" => Ok(Role::Teacher),
            "famille" => Ok(Role::Family),
            "child" => Ok(Role::Student),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
