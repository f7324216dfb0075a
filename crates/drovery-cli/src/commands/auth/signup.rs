//! Signup command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use drovery_core::{AuthResult, SignupCredentials};

use crate::config::Config;
use crate::output;
use crate::session::AuthClientKind;
use crate::session::storage::{self, StoredSession};

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Display name for the new account
    #[arg(long)]
    pub name: String,

    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Password confirmation; checked locally, never transmitted
    #[arg(long)]
    pub confirm_password: String,
}

pub async fn run(args: SignupArgs) -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let client = AuthClientKind::from_config(&config);
    let credentials = SignupCredentials::new(
        &args.name,
        &args.email,
        &args.password,
        &args.confirm_password,
    );

    eprintln!("{}", "Creating account...".dimmed());

    match client.signup(&credentials).await {
        AuthResult::Success { token, user } => {
            let stored = StoredSession {
                mode: config.mode,
                email: args.email.clone(),
                access_token: token.as_str().to_string(),
                refresh_token: client.refresh_token().map(|t| t.as_str().to_string()),
            };
            storage::save_session(&stored)
                .await
                .context("Failed to save session")?;

            output::success("Account created successfully");
            println!();
            output::field("Email", &args.email);
            output::field("Mode", config.mode.as_str());
            if let Some(user) = user {
                output::field("User", &user.id);
            }

            Ok(())
        }
        AuthResult::Failure { error } => {
            output::error(&error);
            std::process::exit(1);
        }
    }
}
