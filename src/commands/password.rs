//! Forgotten password flow: request an emailed token, then set a new
//! password with it.

use super::Session;
use crate::{
    libs::{
        account::{self, AccountError, PasswordReset},
        messages::Message,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct ForgotPasswordArgs {
    #[arg(short, long)]
    email: Option<String>,
}

#[derive(Debug, Args)]
pub struct ResetPasswordArgs {
    /// Token from the reset link
    #[arg(short, long)]
    token: Option<String>,
}

pub async fn forgot(args: ForgotPasswordArgs) -> Result<()> {
    let session = Session::open()?;
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };

    match account::request_password_reset(&session.backend, &email).await {
        Ok(()) => msg_success!(Message::ResetLinkSent),
        Err(AccountError::Backend(e)) => msg_error!(Message::ResetRequestFailed(e.reason())),
        Err(e) => msg_error!(e),
    }
    Ok(())
}

pub async fn reset(args: ResetPasswordArgs) -> Result<()> {
    let session = Session::open()?;
    let token = match args.token {
        Some(token) => token,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptResetToken.to_string())
            .interact_text()?,
    };
    let new_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewPassword.to_string())
        .interact()?;
    let confirm_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .interact()?;

    let reset = PasswordReset {
        token,
        new_password,
        confirm_password,
    };
    match account::reset_password(&session.backend, &reset).await {
        Ok(text) => msg_success!(Message::PasswordResetResult(text)),
        Err(e) => msg_error!(e.reason()),
    }
    Ok(())
}
