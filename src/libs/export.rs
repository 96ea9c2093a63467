//! Log report export.
//!
//! A [`LogReport`] is built from recomputed entries and written by an
//! [`Exporter`] as PDF (the default), CSV or JSON. All three formats carry
//! the same table: one row per log in entry order, the interval breakdown
//! in the last column and a `TOTAL:` row at the end.
//!
//! ```rust,no_run
//! use chrono::Local;
//! use harvestlog::libs::export::{ExportFormat, Exporter, LogReport};
//! use harvestlog::libs::entry::LogEntry;
//!
//! let entries: Vec<LogEntry> = Vec::new();
//! let today = Local::now().date_naive();
//! let report = LogReport::build("Ravi", entries.iter(), today);
//! let exporter = Exporter::with_default_name(ExportFormat::Pdf, None, false, today);
//! exporter.export(&report)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::clock::format_time_of_day;
use super::entry::{LogEntry, TimeInterval};
use super::ledger::{format_duration, format_money, round2};
use super::messages::Message;
use super::pdf::PdfTable;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const REPORT_HEADERS: [&str; 8] = [
    "Name",
    "Date",
    "Village",
    "Phone",
    "Hours",
    "Wage (Rs.)",
    "Price (Rs.)",
    "Time Intervals",
];

pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const NO_INTERVALS: &str = "No intervals recorded";
pub const TOTAL_LABEL: &str = "TOTAL:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Paginated table, one row per log.
    #[default]
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Strips characters that break report rendering: `&` is removed, a
/// no-break space becomes a space, zero-width spaces are dropped and the
/// result is trimmed.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '&' && *c != '\u{200B}')
        .map(|c| if c == '\u{00A0}' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// One line of the interval column, numbered from 1, e.g.
/// `1) 09:00 AM - 11:00 AM (2.00 hrs, (Rs.)200.00)`.
pub fn interval_line(number: usize, interval: &TimeInterval) -> String {
    let time = |t: Option<NaiveTime>| t.map(format_time_of_day).unwrap_or_default();
    clean_text(&format!(
        "{}) {} - {} ({} hrs, (Rs.){})",
        number,
        time(interval.start),
        time(interval.end),
        format_duration(interval.duration.unwrap_or(0.0)),
        format_money(interval.price)
    ))
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub date: String,
    pub village: String,
    pub phone: String,
    pub hours: String,
    pub wage: String,
    pub price: String,
    pub intervals: Vec<String>,
}

impl ReportRow {
    pub fn from_entry(entry: &LogEntry) -> Self {
        let intervals = if entry.intervals.is_empty() {
            vec![NO_INTERVALS.to_string()]
        } else {
            entry
                .intervals
                .iter()
                .enumerate()
                .map(|(i, interval)| interval_line(i + 1, interval))
                .collect()
        };

        Self {
            name: clean_text(&entry.name),
            date: entry
                .log_date
                .map(|d| d.format(REPORT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            village: clean_text(&entry.village),
            phone: clean_text(&entry.phone),
            hours: format_duration(entry.total_duration),
            wage: format_money(entry.hourly_wage.unwrap_or(0.0)),
            price: format_money(entry.total_price),
            intervals,
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.date.clone(),
            self.village.clone(),
            self.phone.clone(),
            self.hours.clone(),
            self.wage.clone(),
            self.price.clone(),
            self.intervals.join("\n"),
        ]
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogReport {
    pub title: String,
    /// Generation date, `dd/mm/yyyy`.
    pub generated: String,
    pub rows: Vec<ReportRow>,
    pub total_hours: String,
    pub total_price: String,
}

impl LogReport {
    pub fn build<'a>(user: &str, entries: impl IntoIterator<Item = &'a LogEntry>, today: NaiveDate) -> Self {
        let mut total_hours = 0.0;
        let mut total_price = 0.0;
        let rows: Vec<ReportRow> = entries
            .into_iter()
            .inspect(|entry| {
                total_hours += entry.total_duration;
                total_price += entry.total_price;
            })
            .map(ReportRow::from_entry)
            .collect();

        Self {
            title: format!("Log Entries Report - {}", clean_text(user)),
            generated: today.format(REPORT_DATE_FORMAT).to_string(),
            rows,
            total_hours: format_duration(round2(total_hours)),
            total_price: format_money(round2(total_price)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn subtitle(&self) -> String {
        format!("Date: {}", self.generated)
    }

    /// Every log row followed by the totals row.
    pub fn table(&self) -> Vec<Vec<String>> {
        let mut table: Vec<Vec<String>> = self.rows.iter().map(ReportRow::cells).collect();
        table.push(vec![
            String::new(),
            String::new(),
            String::new(),
            TOTAL_LABEL.to_string(),
            self.total_hours.clone(),
            String::new(),
            self.total_price.clone(),
            String::new(),
        ]);
        table
    }
}

/// `{Month}_{Year}_logs.{ext}`, or `{Month}_{Year}_selected_logs.{ext}`
/// when only some logs are exported.
pub fn default_file_name(format: ExportFormat, selected: bool, today: NaiveDate) -> String {
    let suffix = if selected { "selected_logs" } else { "logs" };
    format!("{}_{}.{}", today.format("%B_%Y"), suffix, format.extension())
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: PathBuf) -> Self {
        Self { format, output_path }
    }

    /// Exporter writing to the default file name inside `dir` (the current
    /// directory when `None`).
    pub fn with_default_name(format: ExportFormat, dir: Option<PathBuf>, selected: bool, today: NaiveDate) -> Self {
        let name = default_file_name(format, selected, today);
        let output_path = match dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
        Self::new(format, output_path)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `report` and returns the path written.
    ///
    /// An empty report is refused and nothing is written.
    pub fn export(&self, report: &LogReport) -> Result<PathBuf> {
        if report.is_empty() {
            msg_bail_anyhow!(Message::NoLogsToExport);
        }
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        match self.format {
            ExportFormat::Pdf => self.export_pdf(report)?,
            ExportFormat::Csv => self.export_csv(report)?,
            ExportFormat::Json => self.export_json(report)?,
        }

        debug!(path = %self.output_path.display(), rows = report.rows.len(), "report exported");
        Ok(self.output_path.clone())
    }

    fn export_pdf(&self, report: &LogReport) -> Result<()> {
        let mut pdf = PdfTable::landscape();
        pdf.write_table(&report.title, &report.subtitle(), &REPORT_HEADERS, &report.table());
        debug!(pages = pdf.page_count(), "pdf laid out");
        pdf.save(&self.output_path)?;
        Ok(())
    }

    fn export_csv(&self, report: &LogReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(REPORT_HEADERS)?;
        for row in report.table() {
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, report: &LogReport) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, report)?;
        Ok(())
    }
}
