//! Time-of-day conversions between the 24-hour values used for arithmetic
//! and the `hh:mm AM/PM` strings the backend stores.
//!
//! Parsing never fails loudly: anything that is not a valid time of day
//! comes back as `None`, which the ledger treats as "unset".
//!
//! ```rust
//! use chrono::NaiveTime;
//! use harvestlog::libs::clock::{format_time_of_day, parse_time_of_day};
//!
//! let t = NaiveTime::from_hms_opt(13, 5, 0).unwrap();
//! assert_eq!(format_time_of_day(t), "01:05 PM");
//! assert_eq!(parse_time_of_day("01:05 PM"), Some(t));
//! ```

use chrono::{NaiveTime, Timelike};

/// Formats a time of day on the zero-padded 12-hour clock.
///
/// Midnight is `12:00 AM`, noon is `12:00 PM`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", hour12, time.minute(), meridiem)
}

/// Parses `h:mm AM|PM` back into a time of day.
///
/// The hour may have one or two digits and must be in `1..=12`; minutes
/// must have two digits. The meridiem is case-insensitive and surrounding
/// whitespace is ignored.
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let mut parts = text.split_whitespace();
    let clock = parts.next()?;
    let meridiem = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let (hours, minutes) = split_clock(clock)?;
    if !(1..=12).contains(&hours) {
        return None;
    }

    let hour24 = match meridiem.to_ascii_uppercase().as_str() {
        "AM" if hours == 12 => 0,
        "AM" => hours,
        "PM" if hours == 12 => 12,
        "PM" => hours + 12,
        _ => return None,
    };

    NaiveTime::from_hms_opt(hour24, minutes, 0)
}

/// Parses user input given either as 24-hour `HH:MM` or as `hh:mm AM/PM`.
pub fn parse_clock_input(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.split_whitespace().count() == 2 {
        return parse_time_of_day(text);
    }

    let (hours, minutes) = split_clock(text)?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

fn split_clock(clock: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = clock.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minutes: u32 = minutes.parse().ok()?;
    if minutes > 59 {
        return None;
    }
    Some((hours.parse().ok()?, minutes))
}
