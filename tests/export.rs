#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use harvestlog::libs::entry::{EntryEdit, LogEntry, TimeInterval};
    use harvestlog::libs::export::{
        clean_text, default_file_name, interval_line, ExportFormat, Exporter, LogReport, ReportRow, NO_INTERVALS,
        REPORT_HEADERS, TOTAL_LABEL,
    };
    use harvestlog::libs::ledger::WageLedger;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    fn t(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn logged(name: &str, wage: f64, spans: &[(u32, u32)]) -> LogEntry {
        let ledger = WageLedger::default();
        let mut entry = LogEntry {
            id: Some(1),
            name: name.to_string(),
            phone: "9876500001".to_string(),
            village: "Kothapalli".to_string(),
            log_date: NaiveDate::from_ymd_opt(2025, 3, 4),
            ..LogEntry::default()
        };
        let mut edits = vec![EntryEdit::HourlyWage(Some(wage))];
        for (start, end) in spans {
            edits.push(EntryEdit::AddInterval {
                start: t(*start, 0),
                end: t(*end, 0),
            });
        }
        assert!(entry.apply_all(edits, &ledger));
        entry
    }

    struct ExportTestContext {
        temp_dir: TempDir,
        report: LogReport,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let entries = vec![logged("Lakshmi", 100.0, &[(9, 11)]), logged("Suresh", 120.0, &[(6, 7), (14, 16)])];
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                report: LogReport::build("Ravi", entries.iter(), today()),
            }
        }
    }

    #[test]
    fn test_interval_line_format() {
        let mut interval = TimeInterval::new(t(9, 0), t(11, 0));
        interval.duration = Some(2.0);
        interval.price = 200.0;
        assert_eq!(interval_line(1, &interval), "1) 09:00 AM - 11:00 AM (2.00 hrs, (Rs.)200.00)");

        let half = TimeInterval::new(t(13, 30), None);
        assert_eq!(interval_line(2, &half), "2) 01:30 PM -  (0.00 hrs, (Rs.)0.00)");
    }

    #[test]
    fn test_row_without_intervals() {
        let entry = logged("Anil", 90.0, &[]);
        let row = ReportRow::from_entry(&entry);
        assert_eq!(row.intervals, vec![NO_INTERVALS.to_string()]);
        assert_eq!(row.date, "04/03/2025");
        assert_eq!(row.wage, "90.00");
        assert_eq!(row.price, "0.00");
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text(" Rao & Sons "), "Rao  Sons");
        assert_eq!(clean_text("Kotha\u{00A0}palli"), "Kotha palli");
        assert_eq!(clean_text("Ra\u{200B}vi"), "Ravi");
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(default_file_name(ExportFormat::Pdf, false, today()), "March_2025_logs.pdf");
        assert_eq!(default_file_name(ExportFormat::Csv, true, today()), "March_2025_selected_logs.csv");
        assert_eq!(default_file_name(ExportFormat::Json, false, today()), "March_2025_logs.json");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_report_table_ends_with_totals(ctx: &mut ExportTestContext) {
        let report = &ctx.report;
        assert_eq!(report.title, "Log Entries Report - Ravi");
        assert_eq!(report.subtitle(), "Date: 05/03/2025");
        assert_eq!(report.total_hours, "5.00");
        assert_eq!(report.total_price, "560.00");

        let table = report.table();
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|row| row.len() == REPORT_HEADERS.len()));
        assert_eq!(table[1][7], "1) 06:00 AM - 07:00 AM (1.00 hrs, (Rs.)120.00)\n2) 02:00 PM - 04:00 PM (2.00 hrs, (Rs.)240.00)");
        assert_eq!(table[2], vec!["", "", "", TOTAL_LABEL, "5.00", "", "560.00", ""]);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_pdf(ctx: &mut ExportTestContext) {
        let exporter = Exporter::with_default_name(ExportFormat::Pdf, Some(ctx.temp_dir.path().join("reports")), false, today());

        let path = exporter.export(&ctx.report).unwrap();

        assert_eq!(path, ctx.temp_dir.path().join("reports").join("March_2025_logs.pdf"));
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("logs.csv");
        Exporter::new(ExportFormat::Csv, path.clone()).export(&ctx.report).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Name,Date,Village,Phone,Hours,Wage (Rs.),Price (Rs.),Time Intervals"));
        assert!(text.contains("Lakshmi,04/03/2025,Kothapalli,9876500001,2.00,100.00,200.00,"));
        assert!(text.trim_end().ends_with(",,,TOTAL:,5.00,,560.00,"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("logs.json");
        Exporter::new(ExportFormat::Json, path.clone()).export(&ctx.report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["title"], "Log Entries Report - Ravi");
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
        assert_eq!(value["rows"][0]["name"], "Lakshmi");
        assert_eq!(value["total_price"], "560.00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_report_writes_nothing(ctx: &mut ExportTestContext) {
        let empty = LogReport::build("Ravi", Vec::<LogEntry>::new().iter(), today());
        let path = ctx.temp_dir.path().join("empty.pdf");

        let err = Exporter::new(ExportFormat::Pdf, path.clone()).export(&empty).unwrap_err();

        assert!(err.to_string().contains("No logs found for this user"));
        assert!(!path.exists());
    }
}
