//! Saving the draft to the backend.
//!
//! Rows are sent one `save_log` call at a time, in draft order, and every
//! row is attempted even after a failure. Saved rows leave the draft;
//! failed rows stay so nothing typed is lost. A fully successful save
//! leaves a single blank row behind.

use super::entry::LogEntry;
use super::ledger::WageLedger;
use super::state::AppState;
use crate::api::{LogBackend, LogRecord};
use anyhow::Result;
use tracing::{debug, info, warn};

/// What happened to one draft row.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryOutcome {
    /// Position of the row in the draft at the time of saving.
    pub index: usize,
    pub farmer: String,
    /// Backend reason when the save failed.
    pub error: Option<String>,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveReport {
    pub outcomes: Vec<EntryOutcome>,
}

impl SaveReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Saves every non-blank draft row as the logged-in user.
///
/// Each row is recomputed and stamped with `created_by` before sending.
/// Fails only when nobody is logged in or the draft cannot be written;
/// backend failures are recorded in the report instead.
pub async fn save_draft<B: LogBackend>(backend: &B, state: &mut AppState, ledger: &WageLedger) -> Result<SaveReport> {
    let user = state.require_user()?;
    let pending: Vec<(usize, LogEntry)> = state
        .pending_rows()
        .into_iter()
        .map(|(index, row)| (index, row.clone()))
        .collect();

    let mut report = SaveReport::default();
    if pending.is_empty() {
        return Ok(report);
    }

    let mut kept = Vec::new();
    for (index, mut row) in pending {
        row.created_by = user.clone();
        ledger.recompute(&mut row);
        let record = LogRecord::from_entry(&row);

        match backend.save_log(&record).await {
            Ok(()) => {
                debug!(index, farmer = %row.name, "draft row saved");
                report.outcomes.push(EntryOutcome {
                    index,
                    farmer: row.name.clone(),
                    error: None,
                });
            }
            Err(e) => {
                warn!(index, farmer = %row.name, error = %e, "draft row not saved");
                report.outcomes.push(EntryOutcome {
                    index,
                    farmer: row.name.clone(),
                    error: Some(e.reason()),
                });
                kept.push(row);
            }
        }
    }

    if kept.is_empty() {
        state.clear_draft()?;
    } else {
        state.replace_draft(kept)?;
    }

    info!(saved = report.succeeded(), failed = report.failed(), "draft save finished");
    Ok(report)
}
