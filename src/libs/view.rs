//! Console tables for reports, live status and break lists.

use super::formatter::{format_duration, FormattedBreak};
use super::pagination::{PageItem, PaginationWindow};
use super::records::SummaryRow;
use super::report::{EmployeeStats, ReportMode, ReportSummary};
use super::status::EmployeeState;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn summary(summary: &ReportSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEES", "BREAKS", "TOTAL", "AVERAGE"]);
        table.add_row(row![
            summary.total_employees,
            summary.total_breaks,
            summary.total_duration,
            summary.average_duration
        ]);
        table.printstd();

        Ok(())
    }

    pub fn employees(stats: &[EmployeeStats]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "BREAKS", "TOTAL", "AVERAGE", "STATE"]);
        for s in stats {
            table.add_row(row![
                s.emp_id,
                s.employee_name,
                s.department,
                s.break_count,
                s.total_duration,
                s.average_duration,
                Self::state_label(s.state, s.running_seconds)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary_rows(rows: &[SummaryRow]) -> Result<()> {
        let format = ReportMode::Summary.format();
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "BREAKS", "TOTAL"]);
        for r in rows {
            table.add_row(row![
                r.emp_id_label(),
                r.name_label(),
                r.department_label(),
                r.precomputed_breaks(),
                format.render(r.precomputed_minutes().round() as u64)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn status(stats: &[EmployeeStats]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "STATE", "ON BREAK FOR"]);
        for s in stats {
            table.add_row(row![
                s.emp_id,
                s.employee_name,
                s.department,
                s.state,
                s.running_seconds.map_or_else(|| "-".to_string(), format_duration)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn breaks(breaks: &[FormattedBreak], total: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "START", "END", "DURATION", "STATUS"]);
        for b in breaks {
            table.add_row(row![b.index, b.start, b.end, b.duration, b.status]);
        }
        table.add_row(row!["", "", "TOTAL", total, ""]);
        table.printstd();

        Ok(())
    }

    /// Renders a page bar such as `1 ... 8 9 [10] 11 12 ... 20`.
    pub fn page_bar(window: &PaginationWindow) -> String {
        window
            .items()
            .iter()
            .map(|item| match item {
                PageItem::Page(n) if *n == window.current_page => format!("[{}]", n),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn state_label(state: EmployeeState, running_seconds: Option<u64>) -> String {
        match running_seconds {
            Some(seconds) if state == EmployeeState::OnBreak => format!("{} ({})", state, format_duration(seconds)),
            _ => state.to_string(),
        }
    }
}
