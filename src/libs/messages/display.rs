//! Display implementation for harvestlog messages.
//!
//! Every user-facing sentence lives here so commands only ever pick a
//! `Message` variant and pass its parameters.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === ACCOUNT MESSAGES ===
            Message::LoginSuccessful(name) => format!("Login successful! Welcome, {}", name),
            Message::LoginFailed(reason) => format!("Login failed: {}", reason),
            Message::LoggedOut => "Logged out successfully!".to_string(),
            Message::NotLoggedIn => "No user logged in. Please login first.".to_string(),
            Message::AlreadyLoggedInAs(name) => format!("Already logged in as {}. Logout first to switch user.", name),
            Message::SignupSuccessful(name) => format!("Signup successful! Welcome, {}", name),
            Message::SignupFailed(reason) => format!("Signup failed. Email may already be registered ({})", reason),
            Message::ResetLinkSent => "Password reset link sent to your email!".to_string(),
            Message::ResetRequestFailed(reason) => format!("Email not found. Please try again ({})", reason),
            Message::PasswordResetResult(text) => text.clone(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptConfirmPassword => "Confirm password".to_string(),
            Message::PromptName => "Name".to_string(),
            Message::PromptResetToken => "Reset token (from the email link)".to_string(),
            Message::PromptNewPassword => "New password".to_string(),

            // === DRAFT MESSAGES ===
            Message::DraftHeader(user) => format!("Unsaved log entries ({})", user),
            Message::DraftRowAdded(row) => format!("Draft row {} added", row),
            Message::DraftRowUpdated(row) => format!("Draft row {} updated", row),
            Message::DraftRowNotFound(row) => format!("Draft row {} does not exist", row),
            Message::IntervalAdded(row, interval) => format!("Interval {} added to draft row {}", interval, row),
            Message::IntervalUpdated(row, interval) => format!("Interval {} of row {} updated", interval, row),
            Message::IntervalNotFound(row, interval) => format!("Row {} has no interval {}", row, interval),
            Message::InvalidTimeInput(input) => {
                format!("'{}' is not a time of day (use HH:MM or hh:mm AM/PM)", input)
            }
            Message::InvalidAmountInput(input) => format!("'{}' is not an amount in rupees", input),
            Message::DraftEmpty => "There are no unsaved entries".to_string(),
            Message::DraftCleared => "Draft cleared".to_string(),
            Message::ConfirmClearDraft => "Are you sure you want to clear all unsaved entries?".to_string(),
            Message::DraftUnreadable(reason) => format!("Unsaved entries could not be restored: {}", reason),

            // === SAVE MESSAGES ===
            Message::NoDraftToSave => "No draft entries to save".to_string(),
            Message::SavingDraft(count) => format!("Saving {} log entr{}...", count, if *count == 1 { "y" } else { "ies" }),
            Message::DraftEntrySaved(farmer) => format!("Saved log for {}", farmer),
            Message::DraftEntryFailed(farmer, reason) => format!("Failed to save log for {}: {}", farmer, reason),
            Message::AllLogsSaved(count) => format!("All {} log(s) saved successfully!", count),
            Message::SomeLogsFailed { saved, failed } => format!(
                "{} log(s) saved, {} failed. Failed entries were kept in the draft.",
                saved, failed
            ),

            // === LOG MESSAGES ===
            Message::LogsHeader(user) => format!("Logs for {}", user),
            Message::NoLogsForUser(user) => format!("No logs found for {}", user),
            Message::NoLogsMatching(term) => format!("No logs found matching \"{}\"", term),
            Message::LogNotFound(id) => format!("Log {} not found", id),
            Message::LogIntervalNotFound(id, index) => format!("Log {} has no interval {}", id, index),
            Message::LogsUpdated(count) => format!("{} log(s) updated successfully!", count),
            Message::NoPendingUpdates => "Nothing to update".to_string(),
            Message::NoLogIdsProvided => "No log IDs provided".to_string(),
            Message::ConfirmDeleteLogs(count) => format!("Are you sure you want to delete {} selected log(s)?", count),
            Message::LogsDeleted(count) => format!("{} selected log(s) deleted successfully!", count),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === SEARCH MESSAGES ===
            Message::SearchResults(count, query) => format!("Found {} results for \"{}\"", count, query),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Report exported to {}", path),
            Message::NoLogsToExport => "No logs found for this user".to_string(),
            Message::NoSelectedLogsToExport => "No selected logs to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleBackend => "Backend settings".to_string(),
            Message::ConfigModuleLedger => "Ledger settings".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Backend base URL".to_string(),
            Message::PromptTimeout => "Request timeout (seconds)".to_string(),
            Message::PromptRounding => "Rounding policy".to_string(),
            Message::PromptOutputDir => "Default report directory (empty for current directory)".to_string(),
        };
        write!(f, "{}", text)
    }
}
