// ABOUTME: Session commands for contest-portal: login, logout, whoami
// ABOUTME: Thin wrappers over SessionManager that render outcomes for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use anyhow::{bail, Result};
use contest_core::models::Credentials;
use contest_portal::{constants::env_vars, context::PortalContext};
use tracing::debug;

use crate::helpers::display::{display_user, print_notice};

/// Log in and persist the session
pub async fn login(context: &PortalContext, email: String, password: Option<String>) -> Result<()> {
    let Some(password) = password.or_else(|| env::var(env_vars::PASSWORD).ok()) else {
        bail!("No password given; pass --password or set {}", env_vars::PASSWORD);
    };

    let session = context.session();
    if let Some(current) = session.current_user() {
        debug!(user_id = %current.id, "Replacing existing session");
    }

    match session.login(&Credentials::new(email, password)).await {
        Ok(user) => {
            print_notice("Logged in");
            display_user(&user);
            Ok(())
        }
        Err(e) => {
            print_notice(&e.user_message());
            Err(e.into())
        }
    }
}

/// Log out; always succeeds locally
pub async fn logout(context: &PortalContext) {
    let session = context.session();
    let was_authenticated = session.is_authenticated();
    session.logout().await;
    print_notice(if was_authenticated {
        "Logged out"
    } else {
        "Not logged in"
    });
}

/// Show the current user
pub async fn whoami(context: &PortalContext, refresh: bool) -> Result<()> {
    let session = context.session();
    if refresh {
        if let Err(e) = session.refresh_profile().await {
            print_notice(&e.user_message());
            return Err(e.into());
        }
    }

    match session.current_user() {
        Some(user) => display_user(&user),
        None => print_notice("Not logged in"),
    }
    Ok(())
}
