//! Report aggregation over employee break data.
//!
//! Two input shapes reach the aggregator and they are never mixed:
//!
//! - **Detailed**: raw [`EmployeeBreakRecord`]s. Break lengths are normalized
//!   and summed in seconds, and rendered as `HH:MM:SS`.
//! - **Summary**: [`SummaryRow`]s the backend already aggregated. Their minute
//!   totals are summed as-is and rendered as `Xh Ym`.
//!
//! An upstream [`PrecomputedSummary`] is authoritative. Each of its figures
//! replaces the figure folded from the rows, and the fold only fills the gaps.
//!
//! ## Averages
//!
//! The average is the total divided by the break count in the mode's own unit.
//! Detailed mode floors to whole seconds and summary mode rounds to the nearest
//! minute. With no breaks the average is the formatted zero.

use crate::libs::duration::{is_resolvable, normalize, resolved_break_count, total_seconds};
use crate::libs::formatter::DurationFormat;
use crate::libs::records::{EmployeeBreakRecord, PrecomputedSummary, SummaryRow};
use crate::libs::status::{classify, EmployeeState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which input shape and formatting policy a report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Raw break records, seconds precision.
    Detailed,
    /// Pre-aggregated rows, minutes precision.
    Summary,
}

impl ReportMode {
    pub fn format(&self) -> DurationFormat {
        match self {
            ReportMode::Detailed => DurationFormat::Clock,
            ReportMode::Summary => DurationFormat::Compact,
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Detailed => f.write_str("detailed"),
            ReportMode::Summary => f.write_str("summary"),
        }
    }
}

/// Rows handed to [`aggregate`], tagged with their mode.
#[derive(Debug, Clone, Copy)]
pub enum ReportRows<'a> {
    Detailed(&'a [EmployeeBreakRecord]),
    Summary(&'a [SummaryRow]),
}

impl ReportRows<'_> {
    pub fn mode(&self) -> ReportMode {
        match self {
            ReportRows::Detailed(_) => ReportMode::Detailed,
            ReportRows::Summary(_) => ReportMode::Summary,
        }
    }
}

/// Global statistics for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub mode: ReportMode,
    pub total_breaks: u64,
    pub total_employees: u64,
    pub total_duration: String,
    pub average_duration: String,
    /// The total the formatted string was rendered from, in the mode's unit
    /// (seconds for detailed, minutes for summary).
    pub total_amount: u64,
}

/// Per-employee line of a detailed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub emp_id: String,
    pub employee_name: String,
    pub department: String,
    /// Every recorded break event.
    pub break_count: usize,
    /// Breaks with a measurable length.
    pub resolved_breaks: usize,
    pub total_seconds: u64,
    pub total_duration: String,
    pub average_duration: String,
    pub state: EmployeeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_seconds: Option<u64>,
}

/// Intermediate figures in the mode's unit, before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Totals {
    breaks: u64,
    employees: u64,
    total: f64,
    average: Option<f64>,
}

impl Totals {
    fn overridden_by(self, summary: &PrecomputedSummary, mode: ReportMode) -> Self {
        let (total, average) = match mode {
            ReportMode::Detailed => (
                summary.total_duration_seconds.or(summary.total_duration_minutes.map(|m| m * 60.0)),
                summary.average_duration_seconds.or(summary.average_duration_minutes.map(|m| m * 60.0)),
            ),
            ReportMode::Summary => (
                summary.total_duration_minutes.or(summary.total_duration_seconds.map(|s| s / 60.0)),
                summary.average_duration_minutes.or(summary.average_duration_seconds.map(|s| s / 60.0)),
            ),
        };

        if total.is_some_and(|t| t != self.total) {
            tracing::debug!(folded = self.total, authoritative = ?total, "precomputed total overrides row fold");
        }

        Totals {
            breaks: summary.total_breaks.unwrap_or(self.breaks),
            employees: summary.total_employees.unwrap_or(self.employees),
            total: total.unwrap_or(self.total),
            average: average.or(self.average),
        }
    }

    fn into_summary(self, mode: ReportMode) -> ReportSummary {
        let format = mode.format();
        let average = self.average.unwrap_or_else(|| {
            if self.breaks > 0 {
                self.total / self.breaks as f64
            } else {
                0.0
            }
        });
        let total_amount = to_units(self.total, mode);

        ReportSummary {
            mode,
            total_breaks: self.breaks,
            total_employees: self.employees,
            total_duration: format.render(total_amount),
            average_duration: if self.breaks > 0 { format.render(to_units(average, mode)) } else { format.zero() },
            total_amount,
        }
    }
}

/// Folds report rows into global statistics.
///
/// # Examples
///
/// ```rust
/// use breaktime::libs::records::{PrecomputedSummary, SummaryRow};
/// use breaktime::libs::report::{aggregate, ReportRows};
///
/// let rows = vec![SummaryRow {
///     total_breaks: Some(4),
///     total_duration_minutes: Some(100.0),
///     ..Default::default()
/// }];
/// let upstream = PrecomputedSummary {
///     total_duration_minutes: Some(120.0),
///     ..Default::default()
/// };
///
/// let summary = aggregate(ReportRows::Summary(&rows), Some(&upstream));
/// assert_eq!(summary.total_duration, "2h 0m");
/// assert_eq!(summary.average_duration, "30m");
/// ```
pub fn aggregate(rows: ReportRows<'_>, precomputed: Option<&PrecomputedSummary>) -> ReportSummary {
    let mode = rows.mode();
    let folded = match rows {
        ReportRows::Detailed(records) => fold_detailed(records),
        ReportRows::Summary(rows) => fold_summary(rows),
    };

    let totals = match precomputed {
        Some(summary) => folded.overridden_by(summary, mode),
        None => folded,
    };
    totals.into_summary(mode)
}

fn fold_detailed(records: &[EmployeeBreakRecord]) -> Totals {
    let breaks = records.iter().map(|r| r.breaks.len() as u64).sum();
    let employees = records
        .iter()
        .filter(|r| r.breaks.iter().any(is_resolvable))
        .map(|r| r.emp_id.as_deref())
        .collect::<HashSet<_>>()
        .len() as u64;
    let total = records
        .iter()
        .flat_map(|r| r.breaks.iter())
        .map(normalize)
        .fold(0u64, u64::saturating_add);

    Totals {
        breaks,
        employees,
        total: total as f64,
        average: None,
    }
}

fn fold_summary(rows: &[SummaryRow]) -> Totals {
    Totals {
        breaks: rows.iter().map(SummaryRow::precomputed_breaks).sum(),
        employees: rows.len() as u64,
        total: rows.iter().map(SummaryRow::precomputed_minutes).sum(),
        average: None,
    }
}

fn to_units(value: f64, mode: ReportMode) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    match mode {
        ReportMode::Detailed => value.floor() as u64,
        ReportMode::Summary => value.round() as u64,
    }
}

/// Statistics for one employee, including their live state as of `now`.
pub fn employee_stats(record: &EmployeeBreakRecord, now: DateTime<Utc>) -> EmployeeStats {
    let format = ReportMode::Detailed.format();
    let total = total_seconds(&record.breaks);
    let break_count = record.breaks.len();
    let classification = classify(record, now);

    EmployeeStats {
        emp_id: record.emp_id_label().to_string(),
        employee_name: record.name_label().to_string(),
        department: record.department_label().to_string(),
        break_count,
        resolved_breaks: resolved_break_count(&record.breaks),
        total_seconds: total,
        total_duration: format.render(total),
        average_duration: if break_count > 0 { format.render(total / break_count as u64) } else { format.zero() },
        state: classification.state(),
        running_seconds: classification.running_seconds,
    }
}

/// [`employee_stats`] for every record, in input order.
pub fn employee_table(records: &[EmployeeBreakRecord], now: DateTime<Utc>) -> Vec<EmployeeStats> {
    records.iter().map(|r| employee_stats(r, now)).collect()
}

/// Pre-aggregates a raw employee record into a summary row.
///
/// This is the upstream side of summary mode: it lets raw data feed a summary
/// view. [`aggregate`] itself never looks at raw breaks in summary mode.
pub fn summarize_employee(record: &EmployeeBreakRecord) -> SummaryRow {
    SummaryRow {
        emp_id: record.emp_id.clone(),
        employee_name: record.employee_name.clone(),
        department: record.department.clone(),
        total_breaks: Some(record.breaks.len() as u64),
        break_count: None,
        total_duration_minutes: Some(total_seconds(&record.breaks) as f64 / 60.0),
        total_minutes: None,
        is_currently_on_break: record.is_currently_on_break,
    }
}
