//! Report export of the logged-in user's saved logs.

use super::Session;
use crate::{
    libs::{
        export::{ExportFormat, Exporter, LogReport},
        logbook::LogBook,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: ExportFormat,

    /// Export only these log ids
    #[arg(short, long, value_delimiter = ',')]
    ids: Vec<i64>,

    /// Output file; defaults to `{Month}_{Year}_logs.{ext}` in the
    /// configured report directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let session = Session::open()?;
    let user = session.state.require_user()?;
    let book = LogBook::load(&session.backend, &user, session.config.ledger()).await?;

    let selected = !args.ids.is_empty();
    let entries = if selected {
        book.select(&args.ids)
    } else {
        book.entries().iter().collect()
    };
    if entries.is_empty() {
        let message = if selected {
            Message::NoSelectedLogsToExport
        } else {
            Message::NoLogsToExport
        };
        msg_info!(message);
        return Ok(());
    }

    let today = Local::now().date_naive();
    let report = LogReport::build(&user, entries, today);
    let exporter = match args.output {
        Some(path) => Exporter::new(args.format, path),
        None => Exporter::with_default_name(args.format, session.config.export_dir(), selected, today),
    };

    let path = exporter.export(&report)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
