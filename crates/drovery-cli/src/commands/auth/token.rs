//! Token command implementation.
//!
//! Prints the raw access token to stdout, suitable for piping into
//! `curl -H "Authorization: Bearer $(drovery auth token)"`.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::session::AuthClientKind;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct TokenArgs {}

pub async fn run(_args: TokenArgs) -> Result<()> {
    let stored = storage::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'drovery auth login' first.")?;

    let config = Config::from_env().context("Invalid configuration")?;
    let client = AuthClientKind::from_persisted(&config, stored.token_pair());

    let token = client
        .access_token()
        .context("No access token held for the active session")?;

    println!("{}", token.as_str());

    Ok(())
}
