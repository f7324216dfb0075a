//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::output;
use crate::session::AuthClientKind;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let stored = storage::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'drovery auth login' first.")?;

    let config = Config::from_env().context("Invalid configuration")?;
    let client = AuthClientKind::from_persisted(&config, stored.token_pair());

    output::field("Email", &stored.email);
    output::field("Mode", stored.mode.as_str());
    output::field(
        "Authenticated",
        if client.is_authenticated() { "yes" } else { "no" },
    );

    Ok(())
}
