#[derive(Debug, Clone)]
pub enum Message {
    // === ACCOUNT MESSAGES ===
    LoginSuccessful(String), // name
    LoginFailed(String),     // reason
    LoggedOut,
    NotLoggedIn,
    AlreadyLoggedInAs(String),
    SignupSuccessful(String), // name
    SignupFailed(String),     // reason
    ResetLinkSent,
    ResetRequestFailed(String),
    PasswordResetResult(String), // backend message
    PromptEmail,
    PromptPassword,
    PromptConfirmPassword,
    PromptName,
    PromptResetToken,
    PromptNewPassword,

    // === DRAFT MESSAGES ===
    DraftHeader(String), // user or "guest"
    DraftRowAdded(usize),
    DraftRowUpdated(usize),
    DraftRowNotFound(usize),
    IntervalAdded(usize, usize),   // row, interval
    IntervalUpdated(usize, usize), // row, interval
    IntervalNotFound(usize, usize),
    InvalidTimeInput(String),
    InvalidAmountInput(String),
    DraftEmpty,
    DraftCleared,
    ConfirmClearDraft,
    DraftUnreadable(String),

    // === SAVE MESSAGES ===
    NoDraftToSave,
    SavingDraft(usize), // row count
    DraftEntrySaved(String),
    DraftEntryFailed(String, String), // farmer, reason
    AllLogsSaved(usize),
    SomeLogsFailed { saved: usize, failed: usize },

    // === LOG MESSAGES ===
    LogsHeader(String),
    NoLogsForUser(String),
    NoLogsMatching(String),
    LogNotFound(i64),
    LogIntervalNotFound(i64, usize), // log id, interval
    LogsUpdated(usize),
    NoPendingUpdates,
    NoLogIdsProvided,
    ConfirmDeleteLogs(usize),
    LogsDeleted(usize),
    OperationCancelled,

    // === SEARCH MESSAGES ===
    SearchResults(usize, String), // count, query

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NoLogsToExport,
    NoSelectedLogsToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleBackend,
    ConfigModuleLedger,
    ConfigModuleExport,
    PromptSelectModules,
    PromptApiUrl,
    PromptTimeout,
    PromptRounding,
    PromptOutputDir,
}
