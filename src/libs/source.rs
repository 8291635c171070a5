//! Loading break data exported by the backend.
//!
//! The backend hands over a JSON document in one of three layouts:
//!
//! - a bare array of employee break records (`[{ "empId": .., "breaks": [..] }]`)
//! - a bare array of summary rows (`[{ "empId": .., "totalBreaks": .. }]`)
//! - an envelope `{ "records": [..], "rows": [..], "summary": {..} }`, where
//!   `data` is accepted as an alias of `records`
//!
//! A bare array counts as summary rows only if no element has break lists and
//! at least one element carries a precomputed total.

use crate::libs::config::Config;
use crate::libs::records::{EmployeeBreakRecord, PrecomputedSummary, SummaryRow};
use crate::libs::report::{summarize_employee, ReportMode, ReportRows};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SUMMARY_KEYS: [&str; 4] = ["totalBreaks", "breakCount", "totalDurationMinutes", "totalMinutes"];
const RECORD_KEYS: [&str; 2] = ["breaks", "currentBreak"];

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no input document given and no default source configured")]
    NotConfigured,
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default, alias = "data")]
    records: Vec<EmployeeBreakRecord>,
    #[serde(default)]
    rows: Vec<SummaryRow>,
    #[serde(default)]
    summary: Option<PrecomputedSummary>,
}

/// Everything one fetch produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakDataset {
    pub records: Vec<EmployeeBreakRecord>,
    pub rows: Vec<SummaryRow>,
    pub summary: Option<PrecomputedSummary>,
}

impl BreakDataset {
    /// Parses a document in any of the accepted layouts.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Array(items) if is_summary_array(&items) => Ok(BreakDataset {
                rows: serde_json::from_value(Value::Array(items))?,
                ..Default::default()
            }),
            Value::Array(items) => Ok(BreakDataset {
                records: serde_json::from_value(Value::Array(items))?,
                ..Default::default()
            }),
            other => {
                let envelope: Envelope = serde_json::from_value(other)?;
                Ok(BreakDataset {
                    records: envelope.records,
                    rows: envelope.rows,
                    summary: envelope.summary,
                })
            }
        }
    }

    /// Reads and parses the document at `path`.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&text).map_err(|source| SourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            records = dataset.records.len(),
            rows = dataset.rows.len(),
            precomputed = dataset.summary.is_some(),
            "loaded break dataset"
        );
        Ok(dataset)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.rows.is_empty()
    }

    /// Summary rows for summary mode. Rows the backend sent win; otherwise they
    /// are pre-aggregated from the raw records.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        if self.rows.is_empty() {
            self.records.iter().map(summarize_employee).collect()
        } else {
            self.rows.clone()
        }
    }

    /// Report rows for `mode`. `summary_rows` must outlive the result and is
    /// only used in summary mode.
    pub fn rows_for<'a>(&'a self, mode: ReportMode, summary_rows: &'a [SummaryRow]) -> ReportRows<'a> {
        match mode {
            ReportMode::Detailed => ReportRows::Detailed(&self.records),
            ReportMode::Summary => ReportRows::Summary(summary_rows),
        }
    }
}

/// Picks the input path: explicit argument first, then the configured default.
pub fn resolve_input(input: Option<PathBuf>, config: &Config) -> Result<PathBuf, SourceError> {
    input.or_else(|| config.source_path()).ok_or(SourceError::NotConfigured)
}

fn is_summary_array(items: &[Value]) -> bool {
    let has_any = |keys: &[&str]| {
        items
            .iter()
            .filter_map(Value::as_object)
            .any(|obj| keys.iter().any(|k| obj.contains_key(*k)))
    };
    !has_any(&RECORD_KEYS[..]) && has_any(&SUMMARY_KEYS[..])
}
