use crate::{
    libs::{
        config::Config,
        messages::Message,
        pagination::{clamp_page, is_valid_max_visible, window},
        view::View,
    },
    msg_bail_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PagesArgs {
    #[arg(long, short, help = "Current page (1-based)")]
    current: usize,
    #[arg(long, short, help = "Total number of pages")]
    total: usize,
    #[arg(long, short, help = "Page numbers to show (defaults to the configured value)")]
    max: Option<usize>,
}

pub fn cmd(args: PagesArgs) -> Result<()> {
    let max_visible = match args.max {
        Some(max) if is_valid_max_visible(max) => max,
        Some(max) => msg_bail_anyhow!(Message::InvalidMaxVisiblePages(max)),
        None => Config::read()?.report_settings().max_visible_pages,
    };

    let total = args.total.max(1);
    let current = clamp_page(args.current, total);
    if current != args.current {
        msg_warning!(Message::PageOutOfRange {
            requested: args.current,
            shown: current,
        });
    }

    msg_print!(View::page_bar(&window(current, total, max_visible)));
    Ok(())
}
