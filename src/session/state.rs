// ABOUTME: Session state snapshot shared read-only with guards, dispatchers, and views
// ABOUTME: Pairs the initializing/ready status with the current user, if any
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use contest_core::models::{Role, User};

/// Hydration progress of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The token store has not been consulted yet
    #[default]
    Initializing,
    /// Hydration finished; authorization decisions may be rendered
    Ready,
}

/// Immutable snapshot of the session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Hydration progress
    pub status: SessionStatus,
    /// Authenticated user, if any
    pub current_user: Option<User>,
}

impl SessionState {
    /// Snapshot taken before hydration
    #[must_use]
    pub const fn initializing() -> Self {
        Self {
            status: SessionStatus::Initializing,
            current_user: None,
        }
    }

    /// Snapshot after hydration with the given user
    #[must_use]
    pub const fn ready(current_user: Option<User>) -> Self {
        Self {
            status: SessionStatus::Ready,
            current_user,
        }
    }

    /// Whether hydration has finished
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == SessionStatus::Ready
    }

    /// Whether a user is present
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Current user, if any
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Whether the current user holds `role`
    ///
    /// Only recognized roles can match; an unrecognized role string is never
    /// "held", even when compared against itself.
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        role.is_recognized()
            && self
                .current_user
                .as_ref()
                .is_some_and(|user| user.role == *role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User::new("1", "Ana", "ana@example.com", role)
    }

    #[test]
    fn test_default_is_initializing_and_anonymous() {
        let state = SessionState::default();
        assert_eq!(state, SessionState::initializing());
        assert!(!state.is_ready());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_has_role_exact_match() {
        let state = SessionState::ready(Some(user(Role::Administrator)));
        assert!(state.has_role(&Role::Administrator));
        assert!(!state.has_role(&Role::Participant));
    }

    #[test]
    fn test_unrecognized_role_never_matches() {
        let curator = Role::Unrecognized("curator".into());
        let state = SessionState::ready(Some(user(curator.clone())));
        assert!(!state.has_role(&curator));
        assert!(!state.has_role(&Role::Administrator));
        assert!(!state.has_role(&Role::Participant));
    }
}
