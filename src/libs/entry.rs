//! Log entries and their time intervals.
//!
//! A [`LogEntry`] is one worker's logged day. It starts life as a draft row,
//! gets saved to the backend (which assigns `id` and `log_date`) and can
//! then be edited or deleted from the log book. Every edit goes through
//! [`LogEntry::apply`] so the derived durations, prices and totals are
//! recomputed before the call returns.

use super::ledger::WageLedger;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One start/stop span of work inside a log entry.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TimeInterval {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    /// Per-interval rate; the entry's hourly wage applies when `None`.
    pub hourly_rate: Option<f64>,
    /// Derived. `None` until both start and end are set.
    pub duration: Option<f64>,
    /// Derived.
    pub price: f64,
}

impl TimeInterval {
    pub fn new(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LogEntry {
    /// Backend identifier; `None` while the entry is a draft.
    pub id: Option<i64>,
    pub created_by: String,
    /// Worker (farmer) name.
    pub name: String,
    pub phone: String,
    pub village: String,
    pub log_date: Option<NaiveDate>,
    /// The backend's `logDate` exactly as received; sent back unchanged on
    /// update. `log_date` is parsed from it for display and search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_log_date: Option<String>,
    pub hourly_wage: Option<f64>,
    /// In entry order; reports and views keep this order.
    pub intervals: Vec<TimeInterval>,
    pub total_duration: f64,
    pub total_price: f64,
}

/// A single field-level change to a log entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryEdit {
    Name(String),
    Phone(String),
    Village(String),
    HourlyWage(Option<f64>),
    AddInterval {
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    },
    IntervalStart(usize, Option<NaiveTime>),
    IntervalEnd(usize, Option<NaiveTime>),
    IntervalRate(usize, Option<f64>),
    RemoveInterval(usize),
}

impl LogEntry {
    /// A blank draft row with one empty interval, ready for input.
    pub fn draft() -> Self {
        Self {
            intervals: vec![TimeInterval::default()],
            ..Self::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// True when nothing has been typed into the row yet.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.phone.is_empty()
            && self.village.is_empty()
            && self.hourly_wage.is_none()
            && self
                .intervals
                .iter()
                .all(|i| i.start.is_none() && i.end.is_none() && i.hourly_rate.is_none())
    }

    /// Applies `edit` and recomputes the derived fields.
    ///
    /// A wage or rate that is not a finite number is stored as unset.
    ///
    /// Returns `false`, leaving the entry untouched, when the edit targets
    /// an interval that does not exist.
    pub fn apply(&mut self, edit: EntryEdit, ledger: &WageLedger) -> bool {
        match edit {
            EntryEdit::Name(value) => self.name = value,
            EntryEdit::Phone(value) => self.phone = value,
            EntryEdit::Village(value) => self.village = value,
            EntryEdit::HourlyWage(value) => self.hourly_wage = value.filter(|v| v.is_finite()),
            EntryEdit::AddInterval { start, end } => self.intervals.push(TimeInterval::new(start, end)),
            EntryEdit::IntervalStart(index, value) => match self.intervals.get_mut(index) {
                Some(interval) => interval.start = value,
                None => return false,
            },
            EntryEdit::IntervalEnd(index, value) => match self.intervals.get_mut(index) {
                Some(interval) => interval.end = value,
                None => return false,
            },
            EntryEdit::IntervalRate(index, value) => match self.intervals.get_mut(index) {
                Some(interval) => interval.hourly_rate = value.filter(|v| v.is_finite()),
                None => return false,
            },
            EntryEdit::RemoveInterval(index) => {
                if index >= self.intervals.len() {
                    return false;
                }
                self.intervals.remove(index);
            }
        }
        ledger.recompute(self);
        true
    }

    /// Applies several edits in order; stops at the first one that fails.
    pub fn apply_all(&mut self, edits: impl IntoIterator<Item = EntryEdit>, ledger: &WageLedger) -> bool {
        edits.into_iter().all(|edit| self.apply(edit, ledger))
    }
}
