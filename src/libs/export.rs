//! Report export for external analysis.
//!
//! Writes the global report summary and the per-employee statistics of a
//! detailed report to CSV or pretty-printed JSON.
//!
//! ## File Naming
//!
//! Without an explicit path the file is named
//! `breaktime_report_<YYYYMMDD_HHMMSS>.<ext>` in the working directory.
//!
//! ```rust,no_run
//! use breaktime::libs::export::{ExportFormat, Exporter};
//! use breaktime::libs::report::{aggregate, employee_table, ReportRows};
//! use chrono::Utc;
//!
//! let records = vec![];
//! let summary = aggregate(ReportRows::Detailed(&records), None);
//! let stats = employee_table(&records, Utc::now());
//! Exporter::new(ExportFormat::Csv, None).export(&summary, &stats)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::report::{EmployeeStats, ReportSummary};
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per employee followed by a summary block.
    Csv,
    /// Pretty-printed JSON with `summary` and `employees` keys.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// JSON export document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    /// Local time of export, `YYYY-MM-DD HH:MM:SS`.
    pub generated_at: String,
    pub summary: ReportSummary,
    pub employees: Vec<EmployeeStats>,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("breaktime_report_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the report and returns the path written to.
    pub fn export(&self, summary: &ReportSummary, employees: &[EmployeeStats]) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.export_csv(summary, employees)?,
            ExportFormat::Json => self.export_json(summary, employees)?,
        }
        tracing::debug!(path = %self.output_path.display(), employees = employees.len(), "report exported");
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, summary: &ReportSummary, employees: &[EmployeeStats]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["ID", "Name", "Department", "Breaks", "Resolved", "Total", "Average", "State"])?;
        for e in employees {
            wtr.write_record([
                e.emp_id.clone(),
                e.employee_name.clone(),
                e.department.clone(),
                e.break_count.to_string(),
                e.resolved_breaks.to_string(),
                e.total_duration.clone(),
                e.average_duration.clone(),
                e.state.to_string(),
            ])?;
        }

        // Summary block
        wtr.write_record(["", "", "", "", "", "", "", ""])?;
        wtr.write_record(["SUMMARY", "", "", "", "", "", "", ""])?;
        wtr.write_record(["Employees", &summary.total_employees.to_string(), "", "", "", "", "", ""])?;
        wtr.write_record(["Breaks", &summary.total_breaks.to_string(), "", "", "", "", "", ""])?;
        wtr.write_record(["Total", &summary.total_duration, "", "", "", "", "", ""])?;
        wtr.write_record(["Average", &summary.average_duration, "", "", "", "", "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, summary: &ReportSummary, employees: &[EmployeeStats]) -> Result<()> {
        let report = ExportReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            summary: summary.clone(),
            employees: employees.to_vec(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
