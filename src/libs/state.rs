//! Application state: who is logged in and the unsaved draft rows.
//!
//! `AppState` is loaded once when a command starts and handed to whatever
//! needs it. Every mutation is written through to disk immediately
//! (`session.json`, `draft.json` in the data directory), and `logout`
//! removes both files.

use super::data_storage::DataStorage;
use super::entry::{EntryEdit, LogEntry};
use super::ledger::WageLedger;
use super::messages::Message;
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

pub const SESSION_FILE: &str = "session.json";
pub const DRAFT_FILE: &str = "draft.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSession {
    pub name: String,
}

#[derive(Debug)]
pub struct AppState {
    storage: DataStorage,
    user: Option<UserSession>,
    draft: Vec<LogEntry>,
}

impl AppState {
    /// Restores the session and draft from `storage`.
    ///
    /// Missing files give an empty state. A draft file that cannot be parsed
    /// is reported and replaced by a fresh draft rather than failing the
    /// command.
    pub fn load(storage: DataStorage) -> Result<Self> {
        let session_path = storage.get_path(SESSION_FILE)?;
        let user = match fs::read_to_string(&session_path) {
            Ok(text) => serde_json::from_str::<UserSession>(&text).ok(),
            Err(_) => None,
        };

        let draft_path = storage.get_path(DRAFT_FILE)?;
        let draft = match fs::read_to_string(&draft_path) {
            Ok(text) => match serde_json::from_str::<Vec<LogEntry>>(&text) {
                Ok(rows) => rows,
                Err(e) => {
                    msg_warning!(Message::DraftUnreadable(e.to_string()));
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        debug!(user = ?user.as_ref().map(|u| &u.name), rows = draft.len(), "state loaded");
        Ok(Self { storage, user, draft })
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// The logged-in user's name, or an error asking to log in.
    pub fn require_user(&self) -> Result<String> {
        self.user()
            .map(str::to_string)
            .ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))
    }

    pub fn login(&mut self, name: &str) -> Result<()> {
        self.user = Some(UserSession { name: name.to_string() });
        self.persist_session()
    }

    /// Forgets the user and discards the draft.
    pub fn logout(&mut self) -> Result<()> {
        self.user = None;
        self.draft.clear();
        for file in [SESSION_FILE, DRAFT_FILE] {
            let path = self.storage.get_path(file)?;
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        debug!("state cleared");
        Ok(())
    }

    pub fn draft(&self) -> &[LogEntry] {
        &self.draft
    }

    /// Appends a row and returns its index.
    pub fn add_draft_row(&mut self, row: LogEntry) -> Result<usize> {
        self.draft.push(row);
        self.persist_draft()?;
        Ok(self.draft.len() - 1)
    }

    /// Applies `edits` to draft row `row`.
    ///
    /// Returns `Ok(false)` without touching anything when the row or a
    /// targeted interval does not exist.
    pub fn edit_draft_row(&mut self, row: usize, edits: Vec<EntryEdit>, ledger: &WageLedger) -> Result<bool> {
        let Some(entry) = self.draft.get(row) else {
            return Ok(false);
        };
        let mut edited = entry.clone();
        if !edited.apply_all(edits, ledger) {
            return Ok(false);
        }
        self.draft[row] = edited;
        self.persist_draft()?;
        Ok(true)
    }

    /// Replaces the whole draft.
    pub fn replace_draft(&mut self, rows: Vec<LogEntry>) -> Result<()> {
        self.draft = rows;
        self.persist_draft()
    }

    /// Resets the draft to a single blank row.
    pub fn clear_draft(&mut self) -> Result<()> {
        self.replace_draft(vec![LogEntry::draft()])
    }

    /// Rows worth saving: everything except untouched blank rows.
    pub fn pending_rows(&self) -> Vec<(usize, &LogEntry)> {
        self.draft.iter().enumerate().filter(|(_, row)| !row.is_blank()).collect()
    }

    fn persist_session(&self) -> Result<()> {
        let path = self.storage.get_path(SESSION_FILE)?;
        match &self.user {
            Some(user) => fs::write(path, serde_json::to_string_pretty(user)?)?,
            None if path.exists() => fs::remove_file(path)?,
            None => {}
        }
        Ok(())
    }

    fn persist_draft(&self) -> Result<()> {
        let path = self.storage.get_path(DRAFT_FILE)?;
        fs::write(path, serde_json::to_string_pretty(&self.draft)?)?;
        debug!(rows = self.draft.len(), "draft persisted");
        Ok(())
    }
}
