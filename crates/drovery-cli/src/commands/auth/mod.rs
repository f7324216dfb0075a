//! Auth subcommand implementations.

mod login;
mod logout;
mod signup;
mod token;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Authenticate an existing account
    Login(login::LoginArgs),

    /// Create and authenticate a new account
    Signup(signup::SignupArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Print the held access token
    Token(token::TokenArgs),

    /// Discard the active session
    Logout(logout::LogoutArgs),
}

pub async fn handle(cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args).await,
        AuthSubcommand::Signup(args) => signup::run(args).await,
        AuthSubcommand::Whoami(args) => whoami::run(args).await,
        AuthSubcommand::Token(args) => token::run(args).await,
        AuthSubcommand::Logout(args) => logout::run(args).await,
    }
}
