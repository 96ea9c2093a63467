#![allow(dead_code)]

use chrono::NaiveTime;
use harvestlog::api::models::{LoginRequest, SignupRequest, UserResponse};
use harvestlog::api::{ApiError, IntervalRecord, LogBackend, LogRecord};
use std::sync::Mutex;

pub fn t(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

pub fn rejected(message: &str) -> ApiError {
    ApiError::Rejected {
        status: 400,
        message: message.to_string(),
    }
}

/// In-memory backend recording every call.
#[derive(Default)]
pub struct MockBackend {
    pub logs: Mutex<Vec<LogRecord>>,
    pub saved: Mutex<Vec<LogRecord>>,
    pub updates: Mutex<Vec<Vec<LogRecord>>>,
    pub deletes: Mutex<Vec<Vec<i64>>>,
    pub calls: Mutex<usize>,
    /// `save_log` fails for records with these worker names.
    pub fail_names: Vec<String>,
    /// Batch update and delete fail.
    pub reject_batches: bool,
}

impl MockBackend {
    pub fn with_logs(logs: Vec<LogRecord>) -> Self {
        Self {
            logs: Mutex::new(logs),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn hit(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

impl LogBackend for MockBackend {
    async fn login(&self, request: &LoginRequest) -> Result<UserResponse, ApiError> {
        self.hit();
        if request.email == "ravi@example.com" && request.password == "secret1" {
            Ok(UserResponse { name: "Ravi".to_string() })
        } else {
            Err(rejected("Invalid credentials"))
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<UserResponse, ApiError> {
        self.hit();
        if request.email == "taken@example.com" {
            return Err(rejected("Email already registered"));
        }
        Ok(UserResponse {
            name: request.name.clone(),
        })
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.hit();
        if email == "ravi@example.com" {
            Ok(())
        } else {
            Err(rejected("Email not found"))
        }
    }

    async fn reset_password(&self, token: &str, _new_password: &str) -> Result<String, ApiError> {
        self.hit();
        if token == "good-token" {
            Ok("Password updated".to_string())
        } else {
            Err(rejected("Invalid or expired token"))
        }
    }

    async fn save_log(&self, record: &LogRecord) -> Result<(), ApiError> {
        self.hit();
        if self.fail_names.contains(&record.name) {
            return Err(rejected("Server error"));
        }
        self.saved.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn fetch_logs(&self, user: &str) -> Result<Vec<LogRecord>, ApiError> {
        self.hit();
        Ok(self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.created_by == user)
            .cloned()
            .collect())
    }

    async fn batch_update(&self, _user: &str, records: &[LogRecord]) -> Result<(), ApiError> {
        self.hit();
        if self.reject_batches {
            return Err(rejected("Update failed"));
        }
        self.updates.lock().unwrap().push(records.to_vec());
        Ok(())
    }

    async fn batch_delete(&self, _user: &str, ids: &[i64]) -> Result<(), ApiError> {
        self.hit();
        if self.reject_batches {
            return Err(rejected("Delete failed"));
        }
        self.deletes.lock().unwrap().push(ids.to_vec());
        self.logs.lock().unwrap().retain(|r| !r.id.is_some_and(|id| ids.contains(&id)));
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<LogRecord>, ApiError> {
        self.hit();
        let query = query.to_lowercase();
        Ok(self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }
}

/// A stored record as the backend would return it.
pub fn stored_log(id: i64, user: &str, name: &str, village: &str, wage: f64, intervals: &[(&str, &str)]) -> LogRecord {
    LogRecord {
        id: Some(id),
        log_date: Some("2025-03-05T10:15:00.000Z".to_string()),
        created_by: user.to_string(),
        name: name.to_string(),
        phno: format!("98765{:05}", id),
        village: village.to_string(),
        hourly_wage: Some(wage),
        // Deliberately stale; clients recompute.
        total_hours: Some(99.0),
        total_price: Some(9999.0),
        time_intervals: intervals
            .iter()
            .map(|(start, stop)| IntervalRecord {
                start_time: start.to_string(),
                stop_time: stop.to_string(),
                ..IntervalRecord::default()
            })
            .collect(),
    }
}
