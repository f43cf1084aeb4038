// ABOUTME: contest-portal CLI - headless client for the culinary contest portal session gate
// ABOUTME: Handles login, logout, profile display, and dashboard routing from the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Log in (password may also come from CONTEST_PASSWORD)
//! contest-portal login --email chef@example.com --password secret
//!
//! # Show the stored user, optionally re-validating with the server
//! contest-portal whoami --refresh
//!
//! # Resolve which dashboard this account gets
//! contest-portal dashboard
//!
//! # End the session
//! contest-portal logout
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contest_portal::{config::ClientConfig, context::PortalContext, logging::LoggingConfig};

#[derive(Parser)]
#[command(
    name = "contest-portal",
    about = "Culinary contest portal client",
    long_about = "Command-line client for the culinary contest portal: session login, logout, and dashboard routing."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Authenticate and store the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (falls back to CONTEST_PASSWORD)
        #[arg(long)]
        password: Option<String>,
    },

    /// End the session locally and on the server
    Logout,

    /// Show the logged-in user
    Whoami {
        /// Re-fetch the profile from the server first
        #[arg(long)]
        refresh: bool,
    },

    /// Route to the dashboard this account is entitled to
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config.api_base_url = contest_portal::config::environment::parse_base_url(api_url)?;
    }

    let context = PortalContext::boot(config)
        .await
        .context("Failed to start session")?;

    match cli.command {
        Command::Login { email, password } => {
            commands::session::login(&context, email, password).await?;
        }
        Command::Logout => commands::session::logout(&context).await,
        Command::Whoami { refresh } => commands::session::whoami(&context, refresh).await?,
        Command::Dashboard => commands::dashboard::show(&context),
    }

    Ok(())
}
