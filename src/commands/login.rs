use super::Session;
use crate::{
    libs::{
        account::{self, LoginForm},
        messages::Message,
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email; prompted when omitted
    #[arg(short, long)]
    email: Option<String>,

    /// Account password; prompted with hidden input when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub async fn cmd(args: LoginArgs) -> Result<()> {
    let mut session = Session::open()?;
    if let Some(user) = session.state.user() {
        msg_info!(Message::AlreadyLoggedInAs(user.to_string()));
        return Ok(());
    }

    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };

    let form = LoginForm { email, password };
    match account::login(&session.backend, &mut session.state, &form).await {
        Ok(name) => msg_success!(Message::LoginSuccessful(name)),
        Err(e) => msg_error!(Message::LoginFailed(e.reason())),
    }
    Ok(())
}
