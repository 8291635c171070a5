/// Every user-facing message the application prints.
///
/// Text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleReport,
    ConfigModuleSource,
    InvalidPageSize(usize),
    InvalidMaxVisiblePages(usize),

    // === SOURCE MESSAGES ===
    SourceLoaded { employees: usize, rows: usize },
    SourceNotConfigured,
    SourceHasNoRows,
    SummaryRowsDerived(usize), // employee count

    // === REPORT MESSAGES ===
    ReportHeader(String), // mode
    EmployeesHeader,
    NoEmployees,
    PageOutOfRange { requested: usize, shown: usize },
    PageIndicator { current: usize, total: usize },

    // === STATUS MESSAGES ===
    StatusHeader(String),  // timestamp
    OnBreakCount(usize, usize), // on break, total
    WatchingStatus(u64),   // refresh seconds
    WatchStopped,

    // === BREAK LIST MESSAGES ===
    BreaksHeader(String), // employee label
    EmployeeNotFound(String),
    NoBreaksRecorded,

    // === EXPORT MESSAGES ===
    ExportingData(String), // format and destination
    ExportCompleted(String), // path
    ExportFailed(String),

    // === PROMPTS ===
    PromptSelectModules,
    PromptPageSize,
    PromptMaxVisiblePages,
    PromptRefreshInterval,
    PromptOverdueAfter,
    PromptSourcePath,
}
