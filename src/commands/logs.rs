//! Saved logs of the logged-in user.
//!
//! Each invocation loads the current logs from the backend. Edits are sent
//! back with a single batch update before the command returns.

use super::entry::{FieldArgs, IntervalArgs};
use super::Session;
use crate::{
    libs::{entry::EntryEdit, logbook::LogBook, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    command: Option<LogsCommand>,
}

#[derive(Debug, Subcommand)]
enum LogsCommand {
    /// List saved logs, optionally filtered
    List {
        /// Match name, village, phone or date (dd/mm/yyyy)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Change the worker fields of a saved log
    Edit {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Add, change or remove an interval of a saved log
    Interval {
        id: i64,
        /// Interval to change; a new interval is appended when omitted
        #[arg(short, long)]
        index: Option<usize>,
        #[command(flatten)]
        interval: IntervalArgs,
        #[arg(long, requires = "index")]
        remove: bool,
    },
    /// Delete saved logs
    Delete {
        ids: Vec<i64>,
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: LogsArgs) -> Result<()> {
    let session = Session::open()?;
    let user = session.state.require_user()?;
    let mut book = LogBook::load(&session.backend, &user, session.config.ledger()).await?;

    match args.command.unwrap_or(LogsCommand::List { search: None }) {
        LogsCommand::List { search } => list(&book, search.as_deref()),
        LogsCommand::Edit { id, fields } => {
            if book.get(id).is_none() {
                msg_error!(Message::LogNotFound(id));
                return Ok(());
            }
            for edit in fields.edits() {
                book.edit(id, edit);
            }
            save(&session, &mut book).await
        }
        LogsCommand::Interval {
            id,
            index,
            interval,
            remove,
        } => {
            let Some(entry) = book.get(id) else {
                msg_error!(Message::LogNotFound(id));
                return Ok(());
            };
            let edits = match index {
                Some(index) if remove => vec![EntryEdit::RemoveInterval(index)],
                Some(index) => interval.edits(index)?,
                None => interval.add_edits(entry.intervals.len())?,
            };
            for edit in edits {
                if !book.edit(id, edit) {
                    msg_error!(Message::LogIntervalNotFound(id, index.unwrap_or_default()));
                    return Ok(());
                }
            }
            save(&session, &mut book).await
        }
        LogsCommand::Delete { ids, yes } => delete(&session, &mut book, ids, yes).await,
    }
}

fn list(book: &LogBook, search: Option<&str>) -> Result<()> {
    if book.entries().is_empty() {
        msg_info!(Message::NoLogsForUser(book.user().to_string()));
        return Ok(());
    }

    let entries = book.filter(search.unwrap_or(""));
    if entries.is_empty() {
        msg_info!(Message::NoLogsMatching(search.unwrap_or("").to_string()));
        return Ok(());
    }

    msg_print!(Message::LogsHeader(book.user().to_string()), true);
    View::logs(&entries)
}

async fn save(session: &Session, book: &mut LogBook) -> Result<()> {
    if !book.has_pending_updates() {
        msg_info!(Message::NoPendingUpdates);
        return Ok(());
    }
    let ids = book.dirty_ids();
    match book.save_updates(&session.backend).await {
        Ok(count) => {
            msg_success!(Message::LogsUpdated(count));
            View::logs(&book.select(&ids))
        }
        Err(e) => {
            msg_error!(e.reason());
            Ok(())
        }
    }
}

async fn delete(session: &Session, book: &mut LogBook, ids: Vec<i64>, yes: bool) -> Result<()> {
    if ids.is_empty() {
        msg_error!(Message::NoLogIdsProvided);
        return Ok(());
    }
    for id in &ids {
        if book.get(*id).is_none() {
            msg_error!(Message::LogNotFound(*id));
            return Ok(());
        }
    }

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteLogs(ids.len()).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match book.delete(&session.backend, &ids).await {
        Ok(count) => msg_success!(Message::LogsDeleted(count)),
        Err(e) => msg_error!(e.reason()),
    }
    Ok(())
}
