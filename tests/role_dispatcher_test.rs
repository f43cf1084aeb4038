// ABOUTME: Integration tests for role-based dashboard dispatch
// ABOUTME: Validates administrator/participant routing, unknown roles, and guard composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{admin_user, curator_user, participant_user, session_with, ScriptedGateway};
use contest_core::models::{Credentials, Role, User};
use contest_portal::constants::routes;
use contest_portal::routing::{
    dispatch, render_dashboard, DashboardVariant, Dispatch, Guarded, RecordingNavigator,
    RouteGuard,
};
use contest_portal::session::SessionState;
use contest_portal::token_store::MemoryTokenStore;

#[test]
fn test_administrator_gets_admin_dashboard() {
    let state = SessionState::ready(Some(admin_user()));

    let outcome = dispatch(&state);

    assert_eq!(outcome.variant(), Some(DashboardVariant::Administrator));
    assert_eq!(outcome.message(), None);
    assert!(matches!(outcome, Dispatch::Dashboard { user, .. } if user == admin_user()));
}

#[test]
fn test_participant_gets_participant_dashboard() {
    let state = SessionState::ready(Some(participant_user()));

    assert_eq!(
        dispatch(&state).variant(),
        Some(DashboardVariant::Participant)
    );
}

#[test]
fn test_unrecognized_role_mounts_nothing() {
    common::init_test_logging();
    let state = SessionState::ready(Some(curator_user()));

    let outcome = dispatch(&state);

    assert_eq!(
        outcome,
        Dispatch::UnrecognizedRole {
            role: "curator".to_owned()
        }
    );
    assert_eq!(outcome.variant(), None);
    let message = outcome.message().unwrap();
    assert!(message.contains("\"curator\""));
    assert!(message.contains("contest administrator"));
}

#[test]
fn test_role_matching_is_case_sensitive() {
    let shouting = User::new(
        "4",
        "Ana Upper",
        "ana@example.com",
        Role::parse("Administrator").unwrap(),
    );

    let outcome = dispatch(&SessionState::ready(Some(shouting)));

    assert_eq!(outcome.variant(), None);
    assert_eq!(
        outcome,
        Dispatch::UnrecognizedRole {
            role: "Administrator".to_owned()
        }
    );
}

#[test]
fn test_initializing_is_loading() {
    assert_eq!(dispatch(&SessionState::initializing()), Dispatch::Loading);
}

#[test]
fn test_ready_without_user_is_unverified() {
    let outcome = dispatch(&SessionState::ready(None));

    assert_eq!(outcome, Dispatch::Unverified);
    assert_eq!(
        outcome.message().as_deref(),
        Some("Authentication could not be verified")
    );
}

#[test]
fn test_render_dashboard_guard_runs_first() {
    let navigator = RecordingNavigator::new();
    let mut guard = RouteGuard::new(&navigator, routes::LOGIN);

    assert_eq!(
        render_dashboard(&mut guard, &SessionState::initializing()),
        Guarded::Loading
    );
    assert_eq!(
        render_dashboard(&mut guard, &SessionState::ready(None)),
        Guarded::Redirecting
    );
    let admitted = render_dashboard(&mut guard, &SessionState::ready(Some(participant_user())));

    assert_eq!(
        admitted.into_content().and_then(|d| d.variant()),
        Some(DashboardVariant::Participant)
    );
    assert_eq!(navigator.visited(), vec![routes::LOGIN.to_owned()]);
}

#[tokio::test]
async fn test_curator_login_reaches_warning_not_dashboard() {
    let gateway = ScriptedGateway::new().with_account(
        "carla@example.com",
        "tasting",
        "token-carla",
        curator_user(),
    );
    let session = session_with(Arc::new(MemoryTokenStore::new()), Arc::new(gateway));
    session.initialize().await;
    session
        .login(&Credentials::new("carla@example.com", "tasting"))
        .await
        .unwrap();

    assert!(session.is_authenticated());
    assert!(!session.is_admin());
    assert!(!session.is_participant());

    let navigator = RecordingNavigator::new();
    let mut guard = RouteGuard::new(&navigator, routes::LOGIN);
    let outcome = render_dashboard(&mut guard, &session.state());

    assert_eq!(
        outcome,
        Guarded::Content(Dispatch::UnrecognizedRole {
            role: "curator".to_owned()
        })
    );
    assert!(navigator.visited().is_empty());
}
