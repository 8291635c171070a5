//! Report export command.

use super::load_dataset;
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        report::{aggregate, employee_table, ReportRows},
    },
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, short, help = "Input JSON document (defaults to the configured source)")]
    input: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    #[arg(short, long, help = "Output file path (auto-generated if omitted)")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let dataset = load_dataset(args.input, &config)?;

    let summary = aggregate(ReportRows::Detailed(&dataset.records), dataset.summary.as_ref());
    let stats = employee_table(&dataset.records, Utc::now());

    let exporter = Exporter::new(args.format, args.output);
    msg_info!(Message::ExportingData(format!(
        "{} to {}",
        args.format.extension().to_uppercase(),
        exporter.output_path().display()
    )));
    let path = exporter
        .export(&summary, &stats)
        .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
