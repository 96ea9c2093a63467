//! Wage ledger: duration and price arithmetic for a worker's logged day.
//!
//! An interval's duration is the wall-clock distance from start to end,
//! wrapping over midnight, so `23:00 → 01:00` is two hours. Its price is
//! duration times the effective hourly rate: the interval's own override if
//! it has one, otherwise the entry's hourly wage. Entry totals are sums of
//! the per-interval values, never `total_duration × hourly_wage`, so rate
//! overrides stay correct.
//!
//! ## Rounding
//!
//! The backend stores every derived figure with two decimals and expects
//! totals that add up from those stored figures. [`RoundingPolicy::PerStep`]
//! (the default) reproduces that: durations are rounded before pricing,
//! prices are rounded before summing. [`RoundingPolicy::FinalOnly`] keeps
//! full precision and rounds totals only; the two can differ by a few cents
//! on entries with many odd-length intervals.
//!
//! ```rust
//! use chrono::NaiveTime;
//! use harvestlog::libs::ledger::compute_interval_duration;
//!
//! let start = NaiveTime::from_hms_opt(23, 0, 0);
//! let end = NaiveTime::from_hms_opt(1, 0, 0);
//! assert_eq!(compute_interval_duration(start, end), Some(2.0));
//! assert_eq!(compute_interval_duration(start, None), None);
//! ```

use super::entry::LogEntry;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;

/// When derived figures get rounded to two decimals.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Round every interval duration and price before aggregating.
    #[default]
    PerStep,
    /// Keep full precision and round totals only.
    FinalOnly,
}

impl RoundingPolicy {
    pub const ALL: [RoundingPolicy; 2] = [RoundingPolicy::PerStep, RoundingPolicy::FinalOnly];

    pub fn label(&self) -> &'static str {
        match self {
            RoundingPolicy::PerStep => "per-step",
            RoundingPolicy::FinalOnly => "final-only",
        }
    }
}

/// Day-level totals of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntryTotals {
    pub total_duration: f64,
    pub total_price: f64,
}

/// Rounds half away from zero to two decimals.
///
/// Values too large to scale by 100 are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// `value` when it is finite, `0.0` otherwise.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Hours between two times of day, wrapping past midnight.
///
/// Returns `None` when either side is unset so a half-filled interval can be
/// told apart from a zero-length one. The result is in `[0, 24)` and is not
/// rounded.
pub fn compute_interval_duration(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Option<f64> {
    let (start, end) = (start?, end?);
    let diff = end.num_seconds_from_midnight() as i64 - start.num_seconds_from_midnight() as i64;
    Some(diff.rem_euclid(SECONDS_PER_DAY) as f64 / SECONDS_PER_HOUR)
}

/// `duration × rate` rounded to two decimals; zero when either is unset or
/// the product is not a finite number.
pub fn compute_interval_price(duration: Option<f64>, rate: Option<f64>) -> f64 {
    match (duration, rate) {
        (Some(duration), Some(rate)) => finite_or_zero(round2(duration * rate)),
        _ => 0.0,
    }
}

/// Renders hours as decimal hours with two places, e.g. `1.50`.
///
/// This is the one duration convention used by views, the wire format and
/// every export.
pub fn format_duration(hours: f64) -> String {
    format!("{:.2}", round2(hours))
}

/// Renders an amount of money with two decimals.
pub fn format_money(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// The calculator that keeps a [`LogEntry`]'s derived fields current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WageLedger {
    pub rounding: RoundingPolicy,
}

impl WageLedger {
    pub fn new(rounding: RoundingPolicy) -> Self {
        Self { rounding }
    }

    /// Interval duration under this ledger's rounding policy.
    pub fn interval_duration(&self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Option<f64> {
        let duration = compute_interval_duration(start, end)?;
        Some(match self.rounding {
            RoundingPolicy::PerStep => round2(duration),
            RoundingPolicy::FinalOnly => duration,
        })
    }

    /// Interval price under this ledger's rounding policy.
    pub fn interval_price(&self, duration: Option<f64>, rate: Option<f64>) -> f64 {
        match self.rounding {
            RoundingPolicy::PerStep => compute_interval_price(duration, rate),
            RoundingPolicy::FinalOnly => match (duration, rate) {
                (Some(duration), Some(rate)) => finite_or_zero(duration * rate),
                _ => 0.0,
            },
        }
    }

    /// Recomputes every interval and the entry totals in place.
    ///
    /// Unset intervals add nothing to the totals but never stop the other
    /// intervals from being computed. Calling it again on an unchanged
    /// entry yields the same values.
    pub fn recompute(&self, entry: &mut LogEntry) -> EntryTotals {
        let wage = entry.hourly_wage.filter(|w| w.is_finite());
        let mut total_duration = 0.0;
        let mut total_price = 0.0;

        for interval in entry.intervals.iter_mut() {
            interval.duration = self.interval_duration(interval.start, interval.end);
            let rate = interval.hourly_rate.filter(|r| r.is_finite()).or(wage);
            interval.price = self.interval_price(interval.duration, rate);
            total_duration += interval.duration.unwrap_or(0.0);
            total_price += interval.price;
        }

        entry.total_duration = round2(total_duration);
        entry.total_price = finite_or_zero(round2(total_price));

        EntryTotals {
            total_duration: entry.total_duration,
            total_price: entry.total_price,
        }
    }
}
