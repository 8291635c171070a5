pub mod breaks;
pub mod export;
pub mod init;
pub mod pages;
pub mod report;
pub mod status;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::source::{resolve_input, BreakDataset, SourceError};
use crate::{msg_bail_anyhow, msg_debug, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the break report with per-employee statistics")]
    Report(report::ReportArgs),
    #[command(about = "Show who is on break right now")]
    Status(status::StatusArgs),
    #[command(about = "List one employee's breaks", arg_required_else_help = true)]
    Breaks(breaks::BreaksArgs),
    #[command(about = "Print the page bar for a position", arg_required_else_help = true)]
    Pages(pages::PagesArgs),
    #[command(about = "Export the report to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Status(args) => status::cmd(args).await,
            Commands::Breaks(args) => breaks::cmd(args),
            Commands::Pages(args) => pages::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Loads the input document named on the command line or in the configuration.
pub(crate) fn load_dataset(input: Option<PathBuf>, config: &Config) -> Result<BreakDataset> {
    let path = match resolve_input(input, config) {
        Ok(path) => path,
        Err(SourceError::NotConfigured) => msg_bail_anyhow!(Message::SourceNotConfigured),
        Err(e) => return Err(e.into()),
    };

    let dataset = BreakDataset::load(&path)?;
    msg_debug!(Message::SourceLoaded {
        employees: dataset.records.len(),
        rows: dataset.rows.len(),
    });
    if dataset.is_empty() {
        msg_warning!(Message::SourceHasNoRows);
    }
    Ok(dataset)
}
