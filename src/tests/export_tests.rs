    use super::*;

    use time::Month;

    #[test]
    fn file_name_is_dated_with_format_extension() {
        let date = Date::from_calendar_date(2026, Month::March, 7).expect("valid date");
        assert_eq!(
            export_file_name(ExportFormat::Csv, date),
            "subscribers-2026-03-07.csv"
        );
        assert_eq!(
            export_file_name(ExportFormat::Json, date),
            "subscribers-2026-03-07.json"
        );
    }

    #[test]
    fn format_parsing_is_case_insensitive_and_strict() {
        assert_eq!(ExportFormat::parse("csv").expect("csv"), ExportFormat::Csv);
        assert_eq!(ExportFormat::parse(" JSON ").expect("json"), ExportFormat::Json);
        assert!(ExportFormat::parse("xml").is_err());
        assert!(ExportFormat::parse("").is_err());
    }

    #[test]
    fn write_export_puts_bytes_under_the_dated_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let bytes = b"email,status\na@example.com,subscribed\n";

        let path = write_export(dir.path(), ExportFormat::Csv, bytes).expect("write export");
        let expected = export_file_name(ExportFormat::Csv, OffsetDateTime::now_utc().date());
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(expected.as_str()));
        assert_eq!(std::fs::read(&path).expect("read back"), bytes);
    }
