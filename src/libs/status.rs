//! Live on-break / available classification.
//!
//! An employee is on break only when the backend says so *and* supplies the
//! running break (a current break without an end). Any other combination is
//! treated as available. The running time is recomputed from the wall clock on
//! every call; live views re-run the classifier every [`LIVE_REFRESH_INTERVAL`].

use crate::libs::duration::elapsed_between;
use crate::libs::records::{BreakRecord, EmployeeBreakRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default refresh cadence for live status views.
pub const LIVE_REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeState {
    OnBreak,
    Available,
}

impl fmt::Display for EmployeeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeState::OnBreak => f.write_str("On break"),
            EmployeeState::Available => f.write_str("Available"),
        }
    }
}

/// Result of classifying one employee at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub on_break: bool,
    /// The running break; only set when `on_break`.
    pub current_break: Option<&'a BreakRecord>,
    /// Seconds the running break has lasted so far; only set when `on_break`.
    pub running_seconds: Option<u64>,
}

impl Classification<'_> {
    pub fn state(&self) -> EmployeeState {
        if self.on_break {
            EmployeeState::OnBreak
        } else {
            EmployeeState::Available
        }
    }
}

/// Classifies `employee` as of `now`.
///
/// A current break with no parseable start time counts as running for 0 seconds.
pub fn classify(employee: &EmployeeBreakRecord, now: DateTime<Utc>) -> Classification<'_> {
    if !employee.is_currently_on_break {
        return available();
    }

    match employee.current_break.as_ref() {
        Some(current) if current.end_time.is_none() => {
            if !current.is_ongoing() {
                tracing::debug!(emp_id = employee.emp_id_label(), "current break has no start time");
            }
            Classification {
                on_break: true,
                current_break: Some(current),
                running_seconds: Some(current.start_time.map_or(0, |start| elapsed_between(start, now))),
            }
        }
        Some(_) => {
            tracing::debug!(emp_id = employee.emp_id_label(), "on-break flag set but current break has ended");
            available()
        }
        None => {
            tracing::debug!(emp_id = employee.emp_id_label(), "on-break flag set without a current break");
            available()
        }
    }
}

fn available<'a>() -> Classification<'a> {
    Classification {
        on_break: false,
        current_break: None,
        running_seconds: None,
    }
}

/// [`classify`] against the current wall clock.
pub fn classify_now(employee: &EmployeeBreakRecord) -> Classification<'_> {
    classify(employee, Utc::now())
}
