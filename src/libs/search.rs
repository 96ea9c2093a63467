//! Client-side log filtering.

use super::entry::LogEntry;

/// Date rendering used when matching a search term, e.g. `05/03/2025`.
pub const SEARCH_DATE_FORMAT: &str = "%d/%m/%Y";

/// True when `entry` matches `term`.
///
/// The term is compared case-insensitively against the worker name,
/// village, phone number and the log date as `dd/mm/yyyy`. A blank term
/// matches every entry.
pub fn matches(entry: &LogEntry, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    let date = entry
        .log_date
        .map(|d| d.format(SEARCH_DATE_FORMAT).to_string())
        .unwrap_or_default();

    [entry.name.as_str(), entry.village.as_str(), entry.phone.as_str(), date.as_str()]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Entries matching `term`, in their original order.
pub fn filter_logs<'a>(entries: &'a [LogEntry], term: &str) -> Vec<&'a LogEntry> {
    entries.iter().filter(|entry| matches(entry, term)).collect()
}
