// ABOUTME: User and role models for the contest portal session
// ABOUTME: Role is a closed variant parsed at the gateway boundary; unknown roles are kept verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::roles;

/// Role granted to a contest account
///
/// The gateway sends roles as free-form strings. They are classified once,
/// here, so dispatch downstream is an exhaustive match instead of repeated
/// string comparisons. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Contest administrator
    Administrator,
    /// Contest participant
    Participant,
    /// Any other role string, preserved for diagnostics
    Unrecognized(String),
}

impl Role {
    /// Classify a wire role string
    ///
    /// # Errors
    ///
    /// Returns an error if the role is empty or whitespace only.
    pub fn parse(raw: &str) -> Result<Self, RoleParseError> {
        if raw.trim().is_empty() {
            return Err(RoleParseError);
        }
        Ok(match raw {
            roles::ADMINISTRATOR => Self::Administrator,
            roles::PARTICIPANT => Self::Participant,
            other => Self::Unrecognized(other.to_owned()),
        })
    }

    /// Wire representation of this role
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => roles::ADMINISTRATOR,
            Self::Participant => roles::PARTICIPANT,
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the roles the portal knows how to route
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Role {
    type Error = RoleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Rejected role value
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("user role must not be empty")]
pub struct RoleParseError;

/// Opaque user identifier
///
/// Accepts either a JSON string or a JSON number on the wire and keeps the
/// textual form; the portal never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Textual form of the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Authenticated principal as reported by the auth gateway
///
/// Treated as an immutable value: the session replaces it wholesale on every
/// login or profile refresh and never edits fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact and lookup key
    pub email: String,
    /// Granted role
    pub role: Role,
    /// Team the user competes with, owned by the server
    #[serde(default, alias = "team_id", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl User {
    /// Create a user without a team
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            email: email.into(),
            role,
            team_id: None,
        }
    }

    /// Attach a team reference
    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}
