use super::load_dataset;
use crate::{
    libs::{
        config::Config,
        messages::Message,
        pagination::{clamp_page, page_slice, total_pages, window},
        report::{aggregate, employee_table, ReportMode},
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, short, help = "Input JSON document (defaults to the configured source)")]
    input: Option<PathBuf>,
    #[arg(long, short, value_enum, default_value_t = ReportMode::Detailed, help = "Detailed break records or pre-aggregated rows")]
    mode: ReportMode,
    #[arg(long, short, default_value_t = 1, help = "Page of the employee table to show")]
    page: usize,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let settings = config.report_settings();
    let dataset = load_dataset(args.input, &config)?;

    let summary_rows = match args.mode {
        ReportMode::Summary => {
            if dataset.rows.is_empty() && !dataset.records.is_empty() {
                msg_info!(Message::SummaryRowsDerived(dataset.records.len()));
            }
            dataset.summary_rows()
        }
        ReportMode::Detailed => Vec::new(),
    };

    let summary = aggregate(dataset.rows_for(args.mode, &summary_rows), dataset.summary.as_ref());
    msg_print!(Message::ReportHeader(args.mode.to_string()), true);
    View::summary(&summary)?;

    let len = match args.mode {
        ReportMode::Detailed => dataset.records.len(),
        ReportMode::Summary => summary_rows.len(),
    };
    if len == 0 {
        msg_print!(Message::NoEmployees);
        return Ok(());
    }

    let pages = total_pages(len, settings.page_size);
    let page = clamp_page(args.page, pages);
    if page != args.page {
        msg_warning!(Message::PageOutOfRange {
            requested: args.page,
            shown: page,
        });
    }

    msg_print!(Message::EmployeesHeader, true);
    match args.mode {
        ReportMode::Detailed => {
            let visible = page_slice(&dataset.records, page, settings.page_size);
            View::employees(&employee_table(visible, Utc::now()))?;
        }
        ReportMode::Summary => View::summary_rows(page_slice(&summary_rows, page, settings.page_size))?,
    }

    let bar = window(page, pages, settings.max_visible_pages);
    msg_print!(Message::PageIndicator { current: page, total: pages });
    msg_print!(View::page_bar(&bar));
    Ok(())
}
