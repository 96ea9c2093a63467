//! Backend boundary.
//!
//! Everything harvestlog persists lives behind the HarvesterLog REST
//! backend. [`LogBackend`] names the operations the client needs; the
//! [`Harvester`] type implements them over HTTP, and tests substitute
//! in-memory implementations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use harvestlog::api::{BackendConfig, Harvester, LogBackend};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let backend = Harvester::new(&BackendConfig::default())?;
//! let logs = backend.fetch_logs("Ravi").await?;
//! println!("{} logs", logs.len());
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod harvester;
pub mod models;

pub use harvester::{BackendConfig, Harvester};
pub use models::{IntervalRecord, LogRecord};

use models::{LoginRequest, SignupRequest, UserResponse};

/// Failure talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got an HTTP answer (DNS, refused, timeout, TLS).
    #[error("Unable to connect to backend. Please check your server. ({0})")]
    Connection(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend answered 2xx but the body was not what we expected.
    #[error("Unexpected response from backend: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built (TLS backend, settings).
    #[error("Could not set up the HTTP client: {0}")]
    ClientSetup(String),
}

impl ApiError {
    /// The short reason shown to users: the backend's own message for
    /// rejections, the full display otherwise.
    pub fn reason(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Operations the HarvesterLog backend offers.
///
/// Calls are awaited one at a time by the callers; implementations need no
/// internal coordination.
#[allow(async_fn_in_trait)]
pub trait LogBackend {
    async fn login(&self, request: &LoginRequest) -> Result<UserResponse, ApiError>;

    async fn signup(&self, request: &SignupRequest) -> Result<UserResponse, ApiError>;

    /// Asks the backend to email a password reset link.
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    /// Completes a reset with the emailed token; returns the backend's
    /// message text.
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<String, ApiError>;

    /// Creates one log. The backend assigns `id` and `logDate`.
    async fn save_log(&self, record: &LogRecord) -> Result<(), ApiError>;

    /// All logs created by `user`.
    async fn fetch_logs(&self, user: &str) -> Result<Vec<LogRecord>, ApiError>;

    /// Replaces the listed logs (addressed by their `id`).
    async fn batch_update(&self, user: &str, records: &[LogRecord]) -> Result<(), ApiError>;

    async fn batch_delete(&self, user: &str, ids: &[i64]) -> Result<(), ApiError>;

    /// Server-side search across logs.
    async fn search(&self, query: &str) -> Result<Vec<LogRecord>, ApiError>;
}
