//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function; [`Cli::menu`] parses the command line and dispatches.

pub mod entry;
pub mod export;
pub mod init;
pub mod login;
pub mod logout;
pub mod logs;
pub mod password;
pub mod save;
pub mod search;
pub mod signup;

use crate::api::Harvester;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::state::AppState;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log in to the backend")]
    Login(login::LoginArgs),
    #[command(about = "Log out and discard unsaved entries")]
    Logout,
    #[command(about = "Create an account")]
    Signup(signup::SignupArgs),
    #[command(about = "Request a password reset email")]
    ForgotPassword(password::ForgotPasswordArgs),
    #[command(about = "Set a new password with the emailed token")]
    ResetPassword(password::ResetPasswordArgs),
    #[command(about = "Edit unsaved log entries", arg_required_else_help = true)]
    Entry(entry::EntryArgs),
    #[command(about = "Save unsaved entries to the backend")]
    Save,
    #[command(about = "View, edit and delete saved logs")]
    Logs(logs::LogsArgs),
    #[command(about = "Search logs on the backend")]
    Search(search::SearchArgs),
    #[command(about = "Export saved logs as a report")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Signup(args) => signup::cmd(args).await,
            Commands::ForgotPassword(args) => password::forgot(args).await,
            Commands::ResetPassword(args) => password::reset(args).await,
            Commands::Entry(args) => entry::cmd(args),
            Commands::Save => save::cmd().await,
            Commands::Logs(args) => logs::cmd(args).await,
            Commands::Search(args) => search::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Configuration, persisted state and a backend client for one command.
pub(crate) struct Session {
    pub config: Config,
    pub state: AppState,
    pub backend: Harvester,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = Config::read()?;
        let state = AppState::load(DataStorage::new())?;
        let backend = Harvester::new(&config.backend_config())?;
        Ok(Self { config, state, backend })
    }
}
