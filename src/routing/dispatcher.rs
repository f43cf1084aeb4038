// ABOUTME: Role dispatcher selecting the administrator or participant dashboard for a session
// ABOUTME: Unknown roles produce a blocking warning instead of silently picking a dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use contest_core::models::{Role, User};

use crate::constants::messages;
use crate::session::{SessionState, SessionStatus};

/// Dashboard implementations a user can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardVariant {
    /// Contest management: teams, participants, judging
    Administrator,
    /// The participant's own team and submissions
    Participant,
}

impl fmt::Display for DashboardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Administrator => write!(f, "administrator dashboard"),
            Self::Participant => write!(f, "participant dashboard"),
        }
    }
}

/// What to mount for the dashboard route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Hydration in progress; same indicator as the route guard
    Loading,
    /// Ready but no user; only reachable if the route guard was bypassed
    Unverified,
    /// Mount a dashboard for this user
    Dashboard {
        /// Which implementation to mount
        variant: DashboardVariant,
        /// The user it is mounted for
        user: User,
    },
    /// The user's role is not one the portal can route
    UnrecognizedRole {
        /// The role string exactly as received
        role: String,
    },
}

impl Dispatch {
    /// Mounted variant, if any
    #[must_use]
    pub const fn variant(&self) -> Option<DashboardVariant> {
        match self {
            Self::Dashboard { variant, .. } => Some(*variant),
            Self::Loading | Self::Unverified | Self::UnrecognizedRole { .. } => None,
        }
    }

    /// Error or warning text to display, if this is not a dashboard
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unverified => Some(messages::AUTHENTICATION_UNVERIFIED.to_owned()),
            Self::UnrecognizedRole { role } => Some(format!(
                "Your account has the role \"{role}\", which this portal does not recognize. \
                 Please contact a contest administrator."
            )),
            Self::Loading | Self::Dashboard { .. } => None,
        }
    }
}

/// Choose the dashboard for a session snapshot
#[must_use]
pub fn dispatch(state: &SessionState) -> Dispatch {
    if state.status == SessionStatus::Initializing {
        return Dispatch::Loading;
    }
    let Some(user) = state.user() else {
        return Dispatch::Unverified;
    };

    let variant = match &user.role {
        Role::Administrator => DashboardVariant::Administrator,
        Role::Participant => DashboardVariant::Participant,
        Role::Unrecognized(raw) => {
            tracing::warn!(user_id = %user.id, role = %raw, "User has an unrecognized role");
            return Dispatch::UnrecognizedRole { role: raw.clone() };
        }
    };

    Dispatch::Dashboard {
        variant,
        user: user.clone(),
    }
}
