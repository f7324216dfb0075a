//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::output;
use crate::session::AuthClientKind;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;

    if let Some(stored) = storage::load_session()
        .await
        .context("Failed to load session")?
    {
        let client = AuthClientKind::from_persisted(&config, stored.token_pair());
        client.logout();
    }

    // Clearing is unconditional; logging out twice is fine.
    storage::clear_session()
        .await
        .context("Failed to clear session")?;

    output::success("Logged out");

    Ok(())
}
