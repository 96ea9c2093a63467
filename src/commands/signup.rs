use super::Session;
use crate::{
    libs::{
        account::{self, SignupForm},
        messages::Message,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(short, long)]
    name: Option<String>,

    #[arg(short, long)]
    email: Option<String>,
}

pub async fn cmd(args: SignupArgs) -> Result<()> {
    let session = Session::open()?;

    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptName.to_string())
            .interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;
    let confirm_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .interact()?;

    let form = SignupForm {
        name,
        email,
        password,
        confirm_password,
    };

    match account::signup(&session.backend, &form).await {
        Ok(name) => msg_success!(Message::SignupSuccessful(name)),
        Err(account::AccountError::Backend(e)) => msg_error!(Message::SignupFailed(e.reason())),
        Err(e) => msg_error!(e),
    }
    Ok(())
}
