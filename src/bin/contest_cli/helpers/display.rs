// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for contest-portal
// ABOUTME: Provides consistent display functions for users and notices

use contest_core::models::User;

/// Display a user's profile
pub fn display_user(user: &User) {
    println!("{}", "=".repeat(60));
    println!("   Name:  {}", user.name);
    println!("   Email: {}", user.email);
    println!("   Role:  {}", user.role);
    if let Some(team_id) = &user.team_id {
        println!("   Team:  {team_id}");
    }
    println!("{}", "=".repeat(60));
}

/// Print a one-line notice
pub fn print_notice(message: &str) {
    println!("{message}");
}
