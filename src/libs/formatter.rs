//! Duration formatting for report views.
//!
//! Two formatters, one per report mode:
//!
//! - [`format_duration`] renders seconds as `HH:MM:SS` for detail rows.
//! - [`format_minutes_compact`] renders minutes as `Xh Ym` for summary rows.
//!
//! Callers pick one through [`DurationFormat`]; the two are never mixed in a
//! single view.
//!
//! ## Examples
//!
//! ```rust
//! use breaktime::libs::formatter::{format_duration, format_minutes_compact};
//!
//! assert_eq!(format_duration(3661), "01:01:01");
//! assert_eq!(format_minutes_compact(125), "2h 5m");
//! assert_eq!(format_minutes_compact(0), "0m");
//! ```

use crate::libs::duration::resolve;
use crate::libs::records::BreakRecord;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A break prepared for table display and export.
///
/// Every field is preformatted so rows can go straight into a table or a CSV
/// writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedBreak {
    /// 1-based position within the employee's break list.
    pub index: usize,
    /// Start time as `HH:MM:SS`, or `-` when unknown.
    pub start: String,
    /// End time as `HH:MM:SS`, or `-` while the break is running.
    pub end: String,
    /// Length as `HH:MM:SS`, or `--:--:--` when it cannot be resolved.
    pub duration: String,
    /// Effective status (`completed`, `ongoing`, `overdue`).
    pub status: String,
}

/// Named formatting strategies for durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationFormat {
    /// `HH:MM:SS`; amounts are seconds.
    Clock,
    /// `Xh Ym`; amounts are minutes.
    Compact,
}

impl DurationFormat {
    /// Renders `amount`, expressed in this strategy's own unit.
    pub fn render(&self, amount: u64) -> String {
        match self {
            DurationFormat::Clock => format_duration(amount),
            DurationFormat::Compact => format_minutes_compact(amount),
        }
    }

    pub fn zero(&self) -> String {
        self.render(0)
    }
}

/// Formats seconds as zero-padded `HH:MM:SS`. Hours are not capped.
///
/// ```rust
/// use breaktime::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(59), "00:00:59");
/// assert_eq!(format_duration(360_000), "100:00:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Formats minutes as `Xh Ym`, dropping the hour segment when it is zero.
///
/// The minute segment is always present, so the smallest output is `0m`.
pub fn format_minutes_compact(total_minutes: u64) -> String {
    let hours = total_minutes / 60;
    let mins = total_minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// A trait for formatting a list of breaks for display.
pub trait BreakGroup {
    /// Formats each break into a [`FormattedBreak`], numbering them from 1.
    fn format(&self, now: DateTime<Utc>, overdue_after: Duration) -> Vec<FormattedBreak>;
}

impl BreakGroup for [BreakRecord] {
    fn format(&self, now: DateTime<Utc>, overdue_after: Duration) -> Vec<FormattedBreak> {
        self.iter()
            .enumerate()
            .map(|(index, b)| FormattedBreak {
                index: index + 1,
                start: b.start_time.map_or_else(|| "-".to_string(), |t| t.format("%H:%M:%S").to_string()),
                end: b.end_time.map_or_else(|| "-".to_string(), |t| t.format("%H:%M:%S").to_string()),
                duration: resolve(b).map_or_else(|| "--:--:--".to_string(), |r| format_duration(r.seconds)),
                status: b.effective_status(now, overdue_after).to_string(),
            })
            .collect()
    }
}
