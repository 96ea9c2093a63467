//! Message display and logging macros.
//!
//! All user-facing output goes through these macros. When debug mode is on
//! (`HARVESTLOG_DEBUG` or `RUST_LOG` is set) the messages are emitted as
//! `tracing` events so they interleave with request and state logging;
//! otherwise they are printed plainly.
//!
//! ```rust
//! use harvestlog::{msg_error, msg_success};
//! use harvestlog::libs::messages::Message;
//!
//! msg_success!(Message::DraftCleared);
//! msg_error!(Message::NotLoggedIn);
//! ```
//!
//! | macro                | prefix | normal mode | debug mode        |
//! |----------------------|--------|-------------|-------------------|
//! | `msg_print!`         |        | `println!`  | `tracing::info!`  |
//! | `msg_success!`       | ✅     | `println!`  | `tracing::info!`  |
//! | `msg_info!`          | ℹ️     | `println!`  | `tracing::info!`  |
//! | `msg_warning!`       | ⚠️     | `println!`  | `tracing::warn!`  |
//! | `msg_error!`         | ❌     | `eprintln!` | `tracing::error!` |

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Environment variable that switches the application into debug mode.
pub const DEBUG_ENV: &str = "HARVESTLOG_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug mode is active. Evaluated once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Installs the `tracing` subscriber when debug mode is active.
///
/// The filter comes from `RUST_LOG`; with only `HARVESTLOG_DEBUG` set it
/// defaults to `harvestlog=debug`. Calling it twice is harmless.
pub fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("harvestlog=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

/// Prints a plain message. Pass `true` as second argument to surround it
/// with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
