// ABOUTME: Route guard withholding protected views until the session is hydrated and authenticated
// ABOUTME: Expresses the login redirect as an explicit, idempotent navigation effect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route Guard
//!
//! Placed in front of any protected view. Each render pass maps the current
//! [`SessionState`] onto exactly one of three outcomes:
//!
//! | Session                    | Outcome                                  |
//! |----------------------------|------------------------------------------|
//! | `Initializing`             | loading indicator, no redirect           |
//! | `Ready`, no user           | navigate to login once, render nothing   |
//! | `Ready`, user present      | render the protected view                |
//!
//! The verdict is recomputed on every pass, so a logout elsewhere in the app
//! sends the visitor back to the login page on the next render.

use std::sync::Mutex;

use contest_core::models::User;
use tracing::debug;

use crate::session::{SessionState, SessionStatus};

/// Side effect used by the guard to leave a protected route
pub trait Navigator {
    /// Navigate to `path`
    fn navigate(&self, path: &str);
}

/// Navigator that records every navigation, for tests and headless callers
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Create a navigator with no history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths navigated to so far, in order
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_owned());
        }
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}

/// Pure authorization decision for one session snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict<'a> {
    /// Hydration in progress
    Pending,
    /// Hydrated and anonymous
    Redirect,
    /// Hydrated and authenticated
    Admit(&'a User),
}

impl<'a> GuardVerdict<'a> {
    /// Decide for `state`
    #[must_use]
    pub const fn evaluate(state: &'a SessionState) -> Self {
        match (state.status, &state.current_user) {
            (SessionStatus::Initializing, _) => Self::Pending,
            (SessionStatus::Ready, None) => Self::Redirect,
            (SessionStatus::Ready, Some(user)) => Self::Admit(user),
        }
    }
}

/// Outcome of one guarded render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    /// Show a neutral loading indicator
    Loading,
    /// A redirect to the login page is in effect; render nothing
    Redirecting,
    /// The protected view
    Content(T),
}

impl<T> Guarded<T> {
    /// Protected content, if admitted
    pub fn into_content(self) -> Option<T> {
        match self {
            Self::Content(content) => Some(content),
            Self::Loading | Self::Redirecting => None,
        }
    }
}

/// Stateful guard for one protected subtree
///
/// Only the "redirect already issued" flag is remembered between passes;
/// the verdict itself is never cached.
#[derive(Debug)]
pub struct RouteGuard<N> {
    navigator: N,
    login_path: String,
    redirect_issued: bool,
}

impl<N: Navigator> RouteGuard<N> {
    /// Guard redirecting anonymous visitors to `login_path`
    pub fn new(navigator: N, login_path: impl Into<String>) -> Self {
        Self {
            navigator,
            login_path: login_path.into(),
            redirect_issued: false,
        }
    }

    /// The navigator used for redirects
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Run one render pass
    ///
    /// `protected` is only called when the session is ready and
    /// authenticated. The login redirect fires once per anonymous episode:
    /// repeated passes while still anonymous do not navigate again, and
    /// admitting a user re-arms it.
    pub fn render<T>(
        &mut self,
        state: &SessionState,
        protected: impl FnOnce(&User) -> T,
    ) -> Guarded<T> {
        match GuardVerdict::evaluate(state) {
            GuardVerdict::Pending => Guarded::Loading,
            GuardVerdict::Redirect => {
                if !self.redirect_issued {
                    debug!(to = %self.login_path, "Anonymous visitor on protected route");
                    self.navigator.navigate(&self.login_path);
                    self.redirect_issued = true;
                }
                Guarded::Redirecting
            }
            GuardVerdict::Admit(user) => {
                self.redirect_issued = false;
                Guarded::Content(protected(user))
            }
        }
    }
}
