//! HTTP client for the HarvesterLog backend.
//!
//! Plain JSON over reqwest, one request per call and no retries: a failed
//! call is reported to the caller, which decides what to keep.

use super::models::{
    DeleteRequest, ErrorBody, ForgotPasswordRequest, LogRecord, LoginRequest, ResetPasswordRequest, SignupRequest,
    UserResponse,
};
use super::{ApiError, LogBackend};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://harvester-logx-backend-1.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const LOGIN_PATH: &[&str] = &["api", "auth", "login"];
const SIGNUP_PATH: &[&str] = &["api", "auth", "signup"];
const FORGOT_PASSWORD_PATH: &[&str] = &["api", "auth", "forgot-password"];
const RESET_PASSWORD_PATH: &[&str] = &["api", "auth", "reset-password"];
const SAVE_LOG_PATH: &[&str] = &["api", "auth", "logs", "save"];
const USER_LOGS_PATH: &[&str] = &["api", "auth", "logs", "user"];
const BATCH_UPDATE_PATH: &[&str] = &["api", "auth", "logs", "batch-update"];
const BATCH_DELETE_PATH: &[&str] = &["api", "auth", "logs", "batch-delete"];
const SEARCH_PATH: &[&str] = &["api", "logs", "search"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackendConfig {
    pub api_url: String,
    /// Whole-request timeout. The hosted backend sleeps when idle and can
    /// take tens of seconds to answer the first call.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "backend".to_string(),
            name: "Backend".to_string(),
        }
    }

    pub fn init(config: &Option<BackendConfig>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleBackend);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTimeout.to_string())
                .default(config.timeout_secs)
                .interact_text()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Harvester {
    client: Client,
    config: BackendConfig,
}

impl Harvester {
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ApiError::ClientSetup(e.to_string()))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Joins `segments` onto the configured base URL, percent-encoding each.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let base = self.config.api_url.trim();
        let mut url = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{} ({})", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn user_logs_url(&self, user: &str) -> Result<Url, ApiError> {
        let mut segments = USER_LOGS_PATH.to_vec();
        segments.push(user.trim());
        self.endpoint(&segments)
    }

    /// Turns a non-2xx response into [`ApiError::Rejected`], preferring the
    /// `error` field of a JSON body as the message.
    async fn ensure_success(res: Response) -> Result<Response, ApiError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .unwrap_or_else(|| match body.trim() {
                "" => status.canonical_reason().unwrap_or("Server error").to_string(),
                text => text.to_string(),
            });

        warn!(status = status.as_u16(), %message, "backend rejected request");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let body = Self::ensure_success(res).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl LogBackend for Harvester {
    async fn login(&self, request: &LoginRequest) -> Result<UserResponse, ApiError> {
        let url = self.endpoint(LOGIN_PATH)?;
        debug!(%url, email = %request.email, "login");
        let res = self.client.post(url).json(request).send().await?;
        Self::read_json(res).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<UserResponse, ApiError> {
        let url = self.endpoint(SIGNUP_PATH)?;
        debug!(%url, email = %request.email, "signup");
        let res = self.client.post(url).json(request).send().await?;
        Self::read_json(res).await
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let url = self.endpoint(FORGOT_PASSWORD_PATH)?;
        debug!(%url, "forgot password");
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let res = self.client.post(url).json(&body).send().await?;
        Self::ensure_success(res).await?;
        Ok(())
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<String, ApiError> {
        let url = self.endpoint(RESET_PASSWORD_PATH)?;
        debug!(%url, "reset password");
        let body = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let res = self.client.post(url).json(&body).send().await?;
        Ok(Self::ensure_success(res).await?.text().await?)
    }

    async fn save_log(&self, record: &LogRecord) -> Result<(), ApiError> {
        let url = self.endpoint(SAVE_LOG_PATH)?;
        debug!(%url, farmer = %record.name, "save log");
        let res = self.client.post(url).json(record).send().await?;
        Self::ensure_success(res).await?;
        Ok(())
    }

    async fn fetch_logs(&self, user: &str) -> Result<Vec<LogRecord>, ApiError> {
        let url = self.user_logs_url(user)?;
        debug!(%url, "fetch logs");
        let res = self.client.get(url).send().await?;
        Self::read_json(res).await
    }

    async fn batch_update(&self, user: &str, records: &[LogRecord]) -> Result<(), ApiError> {
        let url = self.endpoint(BATCH_UPDATE_PATH)?;
        debug!(%url, count = records.len(), "batch update");
        let res = self.client.put(url).query(&[("user", user)]).json(records).send().await?;
        Self::ensure_success(res).await?;
        Ok(())
    }

    async fn batch_delete(&self, user: &str, ids: &[i64]) -> Result<(), ApiError> {
        let url = self.endpoint(BATCH_DELETE_PATH)?;
        debug!(%url, ?ids, "batch delete");
        let body = DeleteRequest { ids: ids.to_vec() };
        let res = self.client.delete(url).query(&[("user", user)]).json(&body).send().await?;
        Self::ensure_success(res).await?;
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<LogRecord>, ApiError> {
        let url = self.endpoint(SEARCH_PATH)?;
        debug!(%url, query, "search");
        let res = self.client.get(url).query(&[("query", query)]).send().await?;
        Self::read_json(res).await
    }
}
