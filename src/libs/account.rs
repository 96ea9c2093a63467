//! Account forms and the login, signup and password reset flows.
//!
//! Forms are validated before anything is sent to the backend; a form that
//! fails validation changes no state.

use super::state::AppState;
use crate::api::models::{LoginRequest, SignupRequest};
use crate::api::{ApiError, LogBackend};
use thiserror::Error;
use tracing::info;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Backend(#[from] ApiError),

    #[error("Could not store the session: {0}")]
    Session(String),
}

impl AccountError {
    /// Short text for the user; backend rejections show the backend's own
    /// message.
    pub fn reason(&self) -> String {
        match self {
            AccountError::Backend(e) => e.reason(),
            other => other.to_string(),
        }
    }
}

fn check_passwords(password: &str, confirm: &str) -> Result<(), AccountError> {
    if password != confirm {
        return Err(AccountError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, AccountError> {
        if self.email.trim().is_empty() {
            return Err(AccountError::MissingField("Email"));
        }
        if self.password.is_empty() {
            return Err(AccountError::MissingField("Password"));
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Checks the form and builds the signup request.
    ///
    /// Password rules are checked first: the two entries must match, then
    /// the password must be at least [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<SignupRequest, AccountError> {
        check_passwords(&self.password, &self.confirm_password)?;
        if self.name.trim().is_empty() {
            return Err(AccountError::MissingField("Name"));
        }
        if self.email.trim().is_empty() {
            return Err(AccountError::MissingField("Email"));
        }
        Ok(SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Completing a password reset with the emailed token.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordReset {
    pub fn validate(&self) -> Result<(), AccountError> {
        check_passwords(&self.new_password, &self.confirm_password)?;
        if self.token.trim().is_empty() {
            return Err(AccountError::MissingField("Reset token"));
        }
        Ok(())
    }
}

/// Logs in and records the returned user name in `state`.
///
/// The session is only written when the backend accepts the credentials.
pub async fn login<B: LogBackend>(backend: &B, state: &mut AppState, form: &LoginForm) -> Result<String, AccountError> {
    let request = form.validate()?;
    let user = backend.login(&request).await?;
    state.login(&user.name).map_err(|e| AccountError::Session(e.to_string()))?;
    info!(user = %user.name, "logged in");
    Ok(user.name)
}

/// Creates an account. Does not log the new user in.
pub async fn signup<B: LogBackend>(backend: &B, form: &SignupForm) -> Result<String, AccountError> {
    let request = form.validate()?;
    let user = backend.signup(&request).await?;
    info!(user = %user.name, "account created");
    Ok(user.name)
}

pub async fn request_password_reset<B: LogBackend>(backend: &B, email: &str) -> Result<(), AccountError> {
    if email.trim().is_empty() {
        return Err(AccountError::MissingField("Email"));
    }
    backend.forgot_password(email.trim()).await?;
    Ok(())
}

/// Completes a reset and returns the backend's confirmation text.
pub async fn reset_password<B: LogBackend>(backend: &B, reset: &PasswordReset) -> Result<String, AccountError> {
    reset.validate()?;
    Ok(backend.reset_password(reset.token.trim(), &reset.new_password).await?)
}
