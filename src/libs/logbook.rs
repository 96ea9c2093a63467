//! The persisted logs of one user.
//!
//! `LogBook` holds the single working copy of the user's saved entries. It
//! is replaced wholesale on [`LogBook::refresh`]; edits recompute the entry
//! and mark it dirty until [`LogBook::save_updates`] succeeds.

use super::entry::{EntryEdit, LogEntry};
use super::ledger::WageLedger;
use super::search::filter_logs;
use crate::api::{ApiError, LogBackend, LogRecord};
use std::collections::BTreeSet;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct LogBook {
    user: String,
    entries: Vec<LogEntry>,
    dirty: BTreeSet<i64>,
    ledger: WageLedger,
}

impl LogBook {
    /// An empty log book; call [`LogBook::refresh`] to populate it.
    pub fn new(user: &str, ledger: WageLedger) -> Self {
        Self {
            user: user.to_string(),
            entries: Vec::new(),
            dirty: BTreeSet::new(),
            ledger,
        }
    }

    /// Fetches the user's logs into a new log book.
    pub async fn load<B: LogBackend>(backend: &B, user: &str, ledger: WageLedger) -> Result<Self, ApiError> {
        let mut book = Self::new(user, ledger);
        book.refresh(backend).await?;
        Ok(book)
    }

    /// Replaces the working list with the backend's current records.
    ///
    /// Pending edits are discarded. On failure the previous list is kept.
    pub async fn refresh<B: LogBackend>(&mut self, backend: &B) -> Result<(), ApiError> {
        let records = backend.fetch_logs(&self.user).await?;
        self.entries = records.iter().map(|r| r.to_entry(&self.ledger)).collect();
        self.dirty.clear();
        debug!(user = %self.user, count = self.entries.len(), "log book refreshed");
        Ok(())
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn get(&self, id: i64) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.id == Some(id))
    }

    pub fn filter(&self, term: &str) -> Vec<&LogEntry> {
        filter_logs(&self.entries, term)
    }

    /// Entries whose id is in `ids`, in log book order.
    pub fn select(&self, ids: &[i64]) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.id.is_some_and(|id| ids.contains(&id)))
            .collect()
    }

    /// Applies `edit` to log `id`.
    ///
    /// Returns `false` when the log or the targeted interval does not exist.
    pub fn edit(&mut self, id: i64, edit: EntryEdit) -> bool {
        let ledger = self.ledger;
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == Some(id)) else {
            return false;
        };
        if !entry.apply(edit, &ledger) {
            return false;
        }
        self.dirty.insert(id);
        true
    }

    /// Ids edited since the last successful save or refresh.
    pub fn dirty_ids(&self) -> Vec<i64> {
        self.dirty.iter().copied().collect()
    }

    pub fn has_pending_updates(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Sends every dirty log in one batch update and returns how many were
    /// sent. Dirty marks are kept when the backend refuses.
    pub async fn save_updates<B: LogBackend>(&mut self, backend: &B) -> Result<usize, ApiError> {
        let records: Vec<LogRecord> = self
            .entries
            .iter()
            .filter(|e| e.id.is_some_and(|id| self.dirty.contains(&id)))
            .map(LogRecord::from_entry)
            .collect();
        if records.is_empty() {
            return Ok(0);
        }

        backend.batch_update(&self.user, &records).await?;
        self.dirty.clear();
        info!(count = records.len(), "logs updated");
        Ok(records.len())
    }

    /// Deletes `ids` on the backend, then locally. Returns how many local
    /// entries were removed.
    pub async fn delete<B: LogBackend>(&mut self, backend: &B, ids: &[i64]) -> Result<usize, ApiError> {
        if ids.is_empty() {
            return Ok(0);
        }
        backend.batch_delete(&self.user, ids).await?;

        let before = self.entries.len();
        self.entries.retain(|e| !e.id.is_some_and(|id| ids.contains(&id)));
        for id in ids {
            self.dirty.remove(id);
        }
        let removed = before - self.entries.len();
        info!(count = removed, "logs deleted");
        Ok(removed)
    }
}
