// ABOUTME: Dashboard command for contest-portal: runs the route guard and role dispatcher
// ABOUTME: Prints which dashboard the stored session is entitled to, or why none is mounted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use contest_portal::{
    context::PortalContext,
    routing::{render_dashboard, Dispatch, Guarded, Navigator, RouteGuard},
};

use crate::helpers::display::{display_user, print_notice};

/// Navigator for a terminal: there is no page to leave, so explain how to log in
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        print_notice(&format!(
            "Login required ({path}). Run `contest-portal login --email <EMAIL>`."
        ));
    }
}

/// Resolve and print the dashboard for the current session
pub fn show(context: &PortalContext) {
    let mut guard = RouteGuard::new(TerminalNavigator, context.config().login_path.clone());

    match render_dashboard(&mut guard, &context.session().state()) {
        Guarded::Loading => print_notice("Loading..."),
        Guarded::Redirecting => {}
        Guarded::Content(Dispatch::Dashboard { variant, user }) => {
            print_notice(&format!("Opening the {variant}"));
            display_user(&user);
        }
        Guarded::Content(other) => {
            if let Some(message) = other.message() {
                print_notice(&message);
            }
        }
    }
}
