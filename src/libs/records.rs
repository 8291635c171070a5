//! Break-tracking records as delivered by the backend.
//!
//! The backend reports the same break in several redundant shapes: precomputed
//! seconds, precomputed minutes, a preformatted `HH:MM:SS` string, or raw
//! start/end timestamps. Records are decoded leniently: a field with an
//! unexpected JSON type decodes as absent instead of failing the document, so a
//! single bad row never takes the whole report down.
//!
//! ## Wire Shapes
//!
//! ```json
//! {
//!   "empId": "E-104",
//!   "employeeName": "Dana Ruiz",
//!   "department": "Dispatch",
//!   "isCurrentlyOnBreak": true,
//!   "currentBreak": { "startTime": "2025-03-04T12:00:00Z" },
//!   "breaks": [
//!     { "startTime": "2025-03-04T09:00:00Z", "endTime": "2025-03-04T09:15:00Z" },
//!     { "durationMinutes": 10, "status": "completed" }
//!   ]
//! }
//! ```

use crate::libs::duration::elapsed_between;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Placeholder rendered for missing identity fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Naive timestamp layouts accepted besides RFC 3339. Interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Lifecycle state of a single break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakStatus {
    Completed,
    Ongoing,
    Overdue,
}

impl BreakStatus {
    fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "completed" => Some(BreakStatus::Completed),
            "ongoing" => Some(BreakStatus::Ongoing),
            "overdue" => Some(BreakStatus::Overdue),
            _ => None,
        }
    }
}

impl fmt::Display for BreakStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BreakStatus::Completed => "completed",
            BreakStatus::Ongoing => "ongoing",
            BreakStatus::Overdue => "overdue",
        };
        f.write_str(text)
    }
}

/// One break interval with every duration representation the backend may send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakRecord {
    /// When the break started.
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// When the break ended. Absent while the break is still running.
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Precomputed length in seconds.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,

    /// Precomputed length in minutes.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,

    /// Preformatted length, usually `HH:MM:SS`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Status reported by the backend, if any.
    #[serde(default, deserialize_with = "lenient_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<BreakStatus>,
}

impl BreakRecord {
    /// A break with a start and no end yet.
    pub fn is_ongoing(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_none()
    }

    /// The reported status, or one derived from the timestamps.
    ///
    /// A break with an end is completed. A running break becomes overdue once it
    /// has lasted longer than `overdue_after`; before that it is ongoing.
    pub fn effective_status(&self, now: DateTime<Utc>, overdue_after: Duration) -> BreakStatus {
        if let Some(status) = self.status {
            return status;
        }
        if self.end_time.is_some() {
            return BreakStatus::Completed;
        }
        match self.start_time {
            Some(start) if elapsed_between(start, now) as i64 > overdue_after.num_seconds() => BreakStatus::Overdue,
            _ => BreakStatus::Ongoing,
        }
    }
}

/// All breaks recorded for one employee within the fetched period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBreakRecord {
    /// Grouping key. A missing id is still a valid key, equal only to other missing ids.
    #[serde(default, deserialize_with = "lenient_id")]
    pub emp_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub employee_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub department: Option<String>,

    /// Breaks in chronological order.
    #[serde(default, deserialize_with = "lenient_breaks")]
    pub breaks: Vec<BreakRecord>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_currently_on_break: bool,

    /// The running break, expected whenever `is_currently_on_break` is set.
    #[serde(default, deserialize_with = "lenient_break", skip_serializing_if = "Option::is_none")]
    pub current_break: Option<BreakRecord>,
}

impl EmployeeBreakRecord {
    pub fn emp_id_label(&self) -> &str {
        label(&self.emp_id)
    }

    pub fn name_label(&self) -> &str {
        label(&self.employee_name)
    }

    pub fn department_label(&self) -> &str {
        label(&self.department)
    }
}

/// A per-employee row that the backend has already aggregated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    #[serde(default, deserialize_with = "lenient_id")]
    pub emp_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub employee_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub department: Option<String>,

    /// Number of breaks taken, as counted upstream.
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub total_breaks: Option<u64>,

    /// Older name for `total_breaks`, still sent by some endpoints.
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub break_count: Option<u64>,

    /// Total break time in minutes, as summed upstream.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_duration_minutes: Option<f64>,

    /// Older name for `total_duration_minutes`.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<f64>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_currently_on_break: bool,
}

impl SummaryRow {
    /// Precomputed break count, preferring `totalBreaks` over `breakCount`.
    pub fn precomputed_breaks(&self) -> u64 {
        self.total_breaks.or(self.break_count).unwrap_or(0)
    }

    /// Precomputed total minutes, preferring `totalDurationMinutes` over `totalMinutes`.
    pub fn precomputed_minutes(&self) -> f64 {
        self.total_duration_minutes.or(self.total_minutes).map_or(0.0, |m| m.max(0.0))
    }

    pub fn emp_id_label(&self) -> &str {
        label(&self.emp_id)
    }

    pub fn name_label(&self) -> &str {
        label(&self.employee_name)
    }

    pub fn department_label(&self) -> &str {
        label(&self.department)
    }
}

/// An aggregate the backend computed for the whole result set.
///
/// When present it is authoritative: its figures win over any row-by-row fold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecomputedSummary {
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub total_breaks: Option<u64>,

    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub total_employees: Option<u64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_duration_seconds: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_duration_minutes: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub average_duration_seconds: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub average_duration_minutes: Option<f64>,
}

/// Returns the field value or the "not available" placeholder.
pub fn label(field: &Option<String>) -> &str {
    field.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or(NOT_AVAILABLE)
}

/// Parses a timestamp from a JSON value.
///
/// Accepts RFC 3339 strings, naive `YYYY-MM-DD HH:MM:SS` strings (with `T` or a
/// space, optional fraction; read as UTC) and integer epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => parse_timestamp_str(s),
        _ => None,
    }
}

fn parse_timestamp_str(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).map(|n| n.max(0.0).floor() as u64))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<BreakStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(BreakStatus::parse(&s)),
        _ => Ok(None),
    }
}

fn lenient_break<'de, D>(deserializer: D) -> Result<Option<BreakRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(Value::is_object).and_then(|v| serde_json::from_value(v).ok()))
}

// Entries that are not objects are dropped rather than failing the employee.
fn lenient_breaks<'de, D>(deserializer: D) -> Result<Vec<BreakRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
