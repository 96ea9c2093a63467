//! Wire records exchanged with the HarvesterLog backend.
//!
//! Field names follow the backend's camelCase JSON. Derived figures travel
//! as two-decimal strings; on the way in every numeric field is accepted as
//! a number, a numeric string, an empty string or `null`, because older
//! records and the batch endpoints are not consistent about it.

use crate::libs::{
    clock::{format_time_of_day, parse_time_of_day},
    entry::{LogEntry, TimeInterval},
    ledger::{format_money, WageLedger},
};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body returned by login and signup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserResponse {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeleteRequest {
    pub ids: Vec<i64>,
}

/// JSON error body, e.g. `{"error": "Invalid credentials"}`.
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRecord {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub stop_time: String,
    #[serde(default, serialize_with = "fixed2_or_empty", deserialize_with = "lenient_number")]
    pub duration: Option<f64>,
    #[serde(default, serialize_with = "fixed2_or_empty", deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub hourly_rate: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_date: Option<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phno: String,
    #[serde(default)]
    pub village: String,
    #[serde(default, serialize_with = "number_or_zero", deserialize_with = "lenient_number")]
    pub hourly_wage: Option<f64>,
    #[serde(default, serialize_with = "fixed2_or_empty", deserialize_with = "lenient_number")]
    pub total_hours: Option<f64>,
    #[serde(default, serialize_with = "fixed2_or_empty", deserialize_with = "lenient_number")]
    pub total_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time_intervals: Vec<IntervalRecord>,
}

impl IntervalRecord {
    pub fn from_interval(interval: &TimeInterval) -> Self {
        Self {
            start_time: interval.start.map(format_time_of_day).unwrap_or_default(),
            stop_time: interval.end.map(format_time_of_day).unwrap_or_default(),
            duration: interval.duration,
            price: Some(interval.price),
            hourly_rate: interval.hourly_rate,
        }
    }

    pub fn to_interval(&self) -> TimeInterval {
        TimeInterval {
            start: parse_time_of_day(&self.start_time),
            end: parse_time_of_day(&self.stop_time),
            hourly_rate: self.hourly_rate,
            ..TimeInterval::default()
        }
    }
}

impl LogRecord {
    /// Builds the record sent to the backend from a (recomputed) entry.
    pub fn from_entry(entry: &LogEntry) -> Self {
        Self {
            id: entry.id,
            log_date: entry
                .stored_log_date
                .clone()
                .or_else(|| entry.log_date.map(|d| d.format("%Y-%m-%d").to_string())),
            created_by: entry.created_by.clone(),
            name: entry.name.clone(),
            phno: entry.phone.clone(),
            village: entry.village.clone(),
            hourly_wage: entry.hourly_wage,
            total_hours: Some(entry.total_duration),
            total_price: Some(entry.total_price),
            time_intervals: entry.intervals.iter().map(IntervalRecord::from_interval).collect(),
        }
    }

    /// Turns a backend record into an entry, recomputing every derived
    /// figure from the stored times and rates.
    pub fn to_entry(&self, ledger: &WageLedger) -> LogEntry {
        let mut entry = LogEntry {
            id: self.id,
            created_by: self.created_by.clone(),
            name: self.name.clone(),
            phone: self.phno.clone(),
            village: self.village.clone(),
            log_date: self.log_date.as_deref().and_then(parse_log_date),
            stored_log_date: self.log_date.clone(),
            hourly_wage: self.hourly_wage,
            intervals: self.time_intervals.iter().map(IntervalRecord::to_interval).collect(),
            total_duration: 0.0,
            total_price: 0.0,
        };
        ledger.recompute(&mut entry);
        entry
    }
}

/// Reads the backend's `logDate`, which may be a plain date or a timestamp.
///
/// Timestamps with an offset give the calendar date in the local time zone.
pub fn parse_log_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn fixed2_or_empty<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&format_money(*v)),
        None => serializer.serialize_str(""),
    }
}

fn number_or_zero<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(value.unwrap_or(0.0))
}
