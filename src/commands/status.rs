use super::load_dataset;
use crate::{
    libs::{
        config::Config,
        messages::Message,
        report::employee_table,
        status::EmployeeState,
        view::View,
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, Utc};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(long, short, help = "Input JSON document (defaults to the configured source)")]
    input: Option<PathBuf>,
    #[arg(long, short, help = "Keep refreshing until interrupted")]
    watch: bool,
}

pub async fn cmd(args: StatusArgs) -> Result<()> {
    let config = Config::read()?;
    if !args.watch {
        return render(args.input, &config);
    }

    let settings = config.report_settings();
    msg_info!(Message::WatchingStatus(settings.refresh_interval().as_secs()));

    // Each tick re-reads the document so the view follows upstream changes.
    let mut interval = tokio::time::interval(settings.refresh_interval());
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = render(args.input.clone(), &config) {
                    msg_error!(e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                msg_info!(Message::WatchStopped);
                break;
            }
        }
    }
    Ok(())
}

fn render(input: Option<PathBuf>, config: &Config) -> Result<()> {
    let dataset = load_dataset(input, config)?;
    let stats = employee_table(&dataset.records, Utc::now());
    let on_break = stats.iter().filter(|s| s.state == EmployeeState::OnBreak).count();

    msg_print!(Message::StatusHeader(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()), true);
    View::status(&stats)?;
    msg_print!(Message::OnBreakCount(on_break, stats.len()));
    Ok(())
}
