use super::Session;
use crate::{
    api::LogBackend,
    libs::{entry::LogEntry, messages::Message, view::View},
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for; matched by the backend
    #[arg(required = true)]
    query: String,
}

pub async fn cmd(args: SearchArgs) -> Result<()> {
    let session = Session::open()?;
    let ledger = session.config.ledger();

    let records = match session.backend.search(args.query.trim()).await {
        Ok(records) => records,
        Err(e) => {
            msg_error!(e.reason());
            return Ok(());
        }
    };

    if records.is_empty() {
        msg_info!(Message::NoLogsMatching(args.query));
        return Ok(());
    }

    let entries: Vec<LogEntry> = records.iter().map(|r| r.to_entry(&ledger)).collect();
    msg_print!(Message::SearchResults(entries.len(), args.query), true);
    View::logs(&entries.iter().collect::<Vec<_>>())
}
