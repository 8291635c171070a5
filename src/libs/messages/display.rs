//! Display implementation for breaktime application messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent across commands and parameters are interpolated type-safely.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::ConfigModuleSource => "Data source settings".to_string(),
            Message::InvalidPageSize(size) => format!("Page size must be at least 1, got {}", size),
            Message::InvalidMaxVisiblePages(max) => {
                format!("Page numbers shown must be an odd number of at least 3, got {}", max)
            }

            // === SOURCE MESSAGES ===
            Message::SourceLoaded { employees, rows } => {
                format!("Loaded {} employee record(s) and {} summary row(s)", employees, rows)
            }
            Message::SourceNotConfigured => {
                "No input document given. Pass --input or set a default source with 'breaktime init'.".to_string()
            }
            Message::SourceHasNoRows => "The input document contains no break data.".to_string(),
            Message::SummaryRowsDerived(count) => format!("No summary rows in input; derived {} from break records", count),

            // === REPORT MESSAGES ===
            Message::ReportHeader(mode) => format!("Break report ({})", mode),
            Message::EmployeesHeader => "Employees:".to_string(),
            Message::NoEmployees => "No employees to show.".to_string(),
            Message::PageOutOfRange { requested, shown } => {
                format!("Page {} is out of range, showing page {} instead", requested, shown)
            }
            Message::PageIndicator { current, total } => format!("Page {} of {}", current, total),

            // === STATUS MESSAGES ===
            Message::StatusHeader(timestamp) => format!("Live status as of {}", timestamp),
            Message::OnBreakCount(on_break, total) => format!("{} of {} employee(s) on break", on_break, total),
            Message::WatchingStatus(seconds) => format!("Refreshing every {} seconds. Press Ctrl+C to stop.", seconds),
            Message::WatchStopped => "Stopped watching.".to_string(),

            // === BREAK LIST MESSAGES ===
            Message::BreaksHeader(employee) => format!("Breaks for {}", employee),
            Message::EmployeeNotFound(id) => format!("Employee '{}' not found in the input document.", id),
            Message::NoBreaksRecorded => "No breaks recorded.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(target) => format!("Exporting report as {}...", target),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptPageSize => "Employees per page".to_string(),
            Message::PromptMaxVisiblePages => "Page numbers shown in the page bar".to_string(),
            Message::PromptRefreshInterval => "Live status refresh interval (seconds)".to_string(),
            Message::PromptOverdueAfter => "Minutes after which a running break is overdue".to_string(),
            Message::PromptSourcePath => "Default input document (JSON)".to_string(),

        };
        write!(f, "{}", text)
    }
}
