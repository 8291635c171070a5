use super::load_dataset;
use crate::{
    libs::{
        config::Config,
        duration::total_seconds,
        formatter::{format_duration, BreakGroup},
        messages::Message,
        status::classify,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

// Arguments for the breaks command.
#[derive(Debug, Args)]
pub struct BreaksArgs {
    #[arg(long, short, help = "Employee id to list breaks for")]
    emp: String,
    #[arg(long, short, help = "Input JSON document (defaults to the configured source)")]
    input: Option<PathBuf>,
}

// Shows every break of one employee with its normalized duration.
pub fn cmd(args: BreaksArgs) -> Result<()> {
    let config = Config::read()?;
    let settings = config.report_settings();
    let dataset = load_dataset(args.input, &config)?;

    let Some(employee) = dataset.records.iter().find(|r| r.emp_id_label() == args.emp) else {
        msg_bail_anyhow!(Message::EmployeeNotFound(args.emp));
    };

    let now = Utc::now();
    msg_print!(
        Message::BreaksHeader(format!("{} ({})", employee.name_label(), employee.emp_id_label())),
        true
    );
    if employee.breaks.is_empty() {
        msg_print!(Message::NoBreaksRecorded);
    } else {
        let rows = employee.breaks.format(now, settings.overdue_after());
        View::breaks(&rows, &format_duration(total_seconds(&employee.breaks)))?;
    }

    let classification = classify(employee, now);
    if let Some(seconds) = classification.running_seconds {
        msg_info!(format!("{} for {}", classification.state(), format_duration(seconds)));
    }
    Ok(())
}
