//! Domain DTOs for the users API.
//!
//! # Design
//! Field names follow the remote JSON so serde needs no renames. Only the
//! fields the card shows are declared; everything else in the payload is
//! ignored. The mock server defines its own copies and the integration tests
//! catch schema drift.

use std::fmt;

use serde::Deserialize;

/// The looked-up profile.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub avatar_url: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

impl Entity {
    /// Preferred display name, falling back to the login handle.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    /// Biography, if present and non-empty.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref().filter(|bio| !bio.is_empty())
    }
}

/// A repository belonging to an `Entity`, in the order the remote listed it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AssociatedItem {
    pub name: String,
    pub html_url: String,
    pub created_at: String,
}

/// A non-empty lookup key, kept exactly as typed.
///
/// Only the empty string is rejected. Whitespace is sent as-is and left to
/// the path encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
