// ABOUTME: Navigation gating for protected routes and role-based dashboard selection
// ABOUTME: Route guard (authenticated or not) composed upstream of the role dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Role-based dashboard selection
pub mod dispatcher;
/// Authentication gate for protected routes
pub mod guard;

pub use dispatcher::{dispatch, DashboardVariant, Dispatch};
pub use guard::{GuardVerdict, Guarded, Navigator, RecordingNavigator, RouteGuard};

use crate::session::SessionState;

/// Render the dashboard route: the guard first, then the dispatcher
///
/// Both can show the loading indicator at once; the guard's verdict wins, so
/// the dispatcher only runs for admitted visitors.
pub fn render_dashboard<N: Navigator>(
    guard: &mut RouteGuard<N>,
    state: &SessionState,
) -> Guarded<Dispatch> {
    guard.render(state, |_| dispatch(state))
}
