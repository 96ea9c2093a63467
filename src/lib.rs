//! # Harvestlog - farm labour ledger
//!
//! A command-line client for recording the hours farm workers put in,
//! computing their wages and keeping the logs on the HarvesterLog backend.
//!
//! ## Features
//!
//! - **Wage ledger**: interval durations across midnight, per-interval rate
//!   overrides, two-decimal rounding that matches the backend
//! - **Draft entries**: rows survive between runs until they are saved
//! - **Saved logs**: list, filter, edit and delete logs on the backend
//! - **Reports**: PDF, CSV and JSON exports of all or selected logs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use harvestlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
