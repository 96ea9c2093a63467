//! Draft editing: the rows typed in before they are saved.
//!
//! Rows and intervals are addressed by their zero-based position as shown
//! by `entry show`. Every change recomputes the row and is written to the
//! draft file straight away.

use crate::{
    libs::{
        clock::parse_clock_input,
        config::Config,
        data_storage::DataStorage,
        entry::{EntryEdit, LogEntry},
        messages::Message,
        state::AppState,
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveTime;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Worker fields shared by `entry` and `logs` edits.
#[derive(Debug, Args, Default)]
pub struct FieldArgs {
    /// Worker name
    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub phone: Option<String>,

    #[arg(short, long)]
    pub village: Option<String>,

    /// Hourly wage (Rs.)
    #[arg(short, long, value_parser = parse_amount)]
    pub wage: Option<f64>,
}

impl FieldArgs {
    pub fn edits(&self) -> Vec<EntryEdit> {
        let mut edits = Vec::new();
        if let Some(name) = &self.name {
            edits.push(EntryEdit::Name(name.trim().to_string()));
        }
        if let Some(phone) = &self.phone {
            edits.push(EntryEdit::Phone(phone.trim().to_string()));
        }
        if let Some(village) = &self.village {
            edits.push(EntryEdit::Village(village.trim().to_string()));
        }
        if let Some(wage) = self.wage {
            edits.push(EntryEdit::HourlyWage(Some(wage)));
        }
        edits
    }
}

/// Interval fields. Times take `HH:MM` or `hh:mm AM/PM`; an empty value
/// clears the field.
#[derive(Debug, Args, Default)]
pub struct IntervalArgs {
    #[arg(short, long)]
    pub start: Option<String>,

    #[arg(short, long)]
    pub end: Option<String>,

    /// Hourly rate for this interval only; empty to fall back to the wage
    #[arg(short, long)]
    pub rate: Option<String>,
}

impl IntervalArgs {
    /// Edits for interval `index`.
    pub fn edits(&self, index: usize) -> Result<Vec<EntryEdit>> {
        let mut edits = Vec::new();
        if let Some(start) = &self.start {
            edits.push(EntryEdit::IntervalStart(index, parse_time_arg(start)?));
        }
        if let Some(end) = &self.end {
            edits.push(EntryEdit::IntervalEnd(index, parse_time_arg(end)?));
        }
        if let Some(rate) = &self.rate {
            edits.push(EntryEdit::IntervalRate(index, parse_rate_arg(rate)?));
        }
        Ok(edits)
    }

    /// Edits appending a new interval.
    pub fn add_edits(&self, new_index: usize) -> Result<Vec<EntryEdit>> {
        let start = self.start.as_deref().map(parse_time_arg).transpose()?.flatten();
        let end = self.end.as_deref().map(parse_time_arg).transpose()?.flatten();
        let mut edits = vec![EntryEdit::AddInterval { start, end }];
        if let Some(rate) = &self.rate {
            edits.push(EntryEdit::IntervalRate(new_index, parse_rate_arg(rate)?));
        }
        Ok(edits)
    }
}

pub fn parse_time_arg(input: &str) -> Result<Option<NaiveTime>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    match parse_clock_input(input) {
        Some(time) => Ok(Some(time)),
        None => msg_bail_anyhow!(Message::InvalidTimeInput(input.to_string())),
    }
}

/// Parses a wage or rate; `inf`, `NaN` and out-of-range values are refused.
pub fn parse_amount(input: &str) -> std::result::Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Message::InvalidAmountInput(input.to_string()).to_string()),
    }
}

fn parse_rate_arg(input: &str) -> Result<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(input).map(Some).map_err(|e| msg_error_anyhow!(e))
}

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[command(subcommand)]
    command: EntryCommand,
}

#[derive(Debug, Subcommand)]
enum EntryCommand {
    /// Add a draft row
    Add {
        #[command(flatten)]
        fields: FieldArgs,
        #[command(flatten)]
        interval: IntervalArgs,
    },
    /// Change the worker fields of a draft row
    Set {
        row: usize,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Append an interval to a draft row
    Interval {
        row: usize,
        #[command(flatten)]
        interval: IntervalArgs,
    },
    /// Change or remove an interval of a draft row
    IntervalSet {
        row: usize,
        index: usize,
        #[command(flatten)]
        interval: IntervalArgs,
        #[arg(long)]
        remove: bool,
    },
    /// Show the draft
    Show,
    /// Discard all unsaved rows
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: EntryArgs) -> Result<()> {
    let ledger = Config::read()?.ledger();
    let mut state = AppState::load(DataStorage::new())?;

    match args.command {
        EntryCommand::Add { fields, interval } => {
            let mut row = LogEntry::draft();
            let mut edits = fields.edits();
            edits.extend(interval.edits(0)?);
            row.apply_all(edits, &ledger);
            let index = state.add_draft_row(row)?;
            msg_success!(Message::DraftRowAdded(index));
            show(&state)
        }
        EntryCommand::Set { row, fields } => {
            if state.edit_draft_row(row, fields.edits(), &ledger)? {
                msg_success!(Message::DraftRowUpdated(row));
                show(&state)
            } else {
                msg_error!(Message::DraftRowNotFound(row));
                Ok(())
            }
        }
        EntryCommand::Interval { row, interval } => {
            let Some(existing) = state.draft().get(row) else {
                msg_error!(Message::DraftRowNotFound(row));
                return Ok(());
            };
            let new_index = existing.intervals.len();
            state.edit_draft_row(row, interval.add_edits(new_index)?, &ledger)?;
            msg_success!(Message::IntervalAdded(row, new_index));
            show(&state)
        }
        EntryCommand::IntervalSet {
            row,
            index,
            interval,
            remove,
        } => {
            if state.draft().get(row).is_none() {
                msg_error!(Message::DraftRowNotFound(row));
                return Ok(());
            }
            let edits = if remove {
                vec![EntryEdit::RemoveInterval(index)]
            } else {
                interval.edits(index)?
            };
            if state.edit_draft_row(row, edits, &ledger)? {
                msg_success!(Message::IntervalUpdated(row, index));
                show(&state)
            } else {
                msg_error!(Message::IntervalNotFound(row, index));
                Ok(())
            }
        }
        EntryCommand::Show => show(&state),
        EntryCommand::Clear { yes } => {
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmClearDraft.to_string())
                    .default(false)
                    .interact()?;
            if confirmed {
                state.clear_draft()?;
                msg_success!(Message::DraftCleared);
            } else {
                msg_info!(Message::OperationCancelled);
            }
            Ok(())
        }
    }
}

fn show(state: &AppState) -> Result<()> {
    if state.draft().is_empty() {
        msg_info!(Message::DraftEmpty);
        return Ok(());
    }
    msg_print!(Message::DraftHeader(state.user().unwrap_or("guest").to_string()), true);
    View::draft(state.draft())
}
