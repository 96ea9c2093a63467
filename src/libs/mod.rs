//! Domain and support modules for harvestlog.
//!
//! - `ledger`, `clock` and `entry` hold the wage arithmetic and the log
//!   entry model.
//! - `state`, `batch`, `logbook` and `search` manage the draft and the
//!   persisted logs.
//! - `account` validates the login, signup and reset forms.
//! - `export`, `pdf` and `view` render logs as files or terminal tables.
//! - `config`, `data_storage` and `messages` are the application plumbing.
//!
//! ```rust
//! use harvestlog::libs::entry::{EntryEdit, LogEntry};
//! use harvestlog::libs::ledger::WageLedger;
//! use chrono::NaiveTime;
//!
//! let ledger = WageLedger::default();
//! let mut entry = LogEntry::draft();
//! entry.apply(EntryEdit::HourlyWage(Some(100.0)), &ledger);
//! entry.apply(EntryEdit::IntervalStart(0, NaiveTime::from_hms_opt(9, 0, 0)), &ledger);
//! entry.apply(EntryEdit::IntervalEnd(0, NaiveTime::from_hms_opt(11, 30, 0)), &ledger);
//! assert_eq!(entry.total_price, 250.0);
//! ```

pub mod account;
pub mod batch;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod export;
pub mod ledger;
pub mod logbook;
pub mod messages;
pub mod pdf;
pub mod search;
pub mod state;
pub mod view;
