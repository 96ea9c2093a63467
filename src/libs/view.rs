use super::batch::SaveReport;
use super::clock::format_time_of_day;
use super::entry::{LogEntry, TimeInterval};
use super::ledger::{format_duration, format_money};
use anyhow::Result;
use chrono::NaiveTime;
use prettytable::{row, Table};

pub struct View {}

fn time_cell(interval: &TimeInterval) -> String {
    let time = |t: Option<NaiveTime>| t.map(format_time_of_day).unwrap_or_else(|| "--:--".to_string());
    format!("{} - {}", time(interval.start), time(interval.end))
}

fn intervals_cell(entry: &LogEntry) -> String {
    if entry.intervals.is_empty() {
        return "-".to_string();
    }
    entry
        .intervals
        .iter()
        .enumerate()
        .map(|(i, interval)| {
            if !interval.is_complete() {
                return format!("{}) {} (incomplete)", i, time_cell(interval));
            }
            let rate = interval.hourly_rate.map(|r| format!(" @{}", format_money(r))).unwrap_or_default();
            format!(
                "{}) {} ({} h{}, {})",
                i,
                time_cell(interval),
                format_duration(interval.duration.unwrap_or(0.0)),
                rate,
                format_money(interval.price)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn wage_cell(entry: &LogEntry) -> String {
    entry.hourly_wage.map(format_money).unwrap_or_default()
}

impl View {
    /// Unsaved rows, indexed by their position in the draft.
    pub fn draft(rows: &[LogEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ROW", "NAME", "PHONE", "VILLAGE", "WAGE", "INTERVALS", "HOURS", "PRICE"]);
        for (index, entry) in rows.iter().enumerate() {
            table.add_row(row![
                index,
                entry.name,
                entry.phone,
                entry.village,
                wage_cell(entry),
                intervals_cell(entry),
                format_duration(entry.total_duration),
                format_money(entry.total_price)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn logs(entries: &[&LogEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "NAME", "PHONE", "VILLAGE", "WAGE", "INTERVALS", "HOURS", "PRICE"]);
        for entry in entries {
            table.add_row(row![
                entry.id.map(|id| id.to_string()).unwrap_or_default(),
                entry.log_date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default(),
                entry.name,
                entry.phone,
                entry.village,
                wage_cell(entry),
                intervals_cell(entry),
                format_duration(entry.total_duration),
                format_money(entry.total_price)
            ]);
        }

        let hours: f64 = entries.iter().map(|e| e.total_duration).sum();
        let price: f64 = entries.iter().map(|e| e.total_price).sum();
        table.add_row(row!["", "", "", "", "", "", "TOTAL", format_duration(hours), format_money(price)]);
        table.printstd();

        Ok(())
    }

    pub fn save_report(report: &SaveReport) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ROW", "FARMER", "RESULT"]);
        for outcome in &report.outcomes {
            let result = match &outcome.error {
                None => "saved".to_string(),
                Some(reason) => format!("failed: {}", reason),
            };
            table.add_row(row![outcome.index, outcome.farmer, result]);
        }
        table.printstd();

        Ok(())
    }
}
