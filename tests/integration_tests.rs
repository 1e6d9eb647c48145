use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::Cell;
use tempfile::TempDir;
use ticket_sort::core::Clock;
use ticket_sort::{
    DemoRunner, OutputFormat, ParseMode, RunFile, RunSettings, SortMode, TicketDraft,
    TicketError, TicketFactory, TimeNormalizer,
};

/// Advances one second per reading so creation order is strictly increasing.
struct TickingClock {
    next: Cell<DateTime<Utc>>,
}

impl TickingClock {
    fn new() -> Self {
        Self {
            next: Cell::new(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + Duration::seconds(1));
        now
    }
}

fn run(settings: &RunSettings) -> Result<(ticket_sort::DemoReport, String)> {
    let factory = TicketFactory::with_clock(TickingClock::new()).with_validation(settings.validate);
    let mut runner = DemoRunner::new(factory, TimeNormalizer::new(settings.parse_mode), settings.format);

    let mut sink = Vec::new();
    let report = runner.run(&settings.drafts, &settings.passes, &mut sink)?;
    Ok((report, String::from_utf8(sink)?))
}

#[test]
fn test_builtin_demo_end_to_end() -> Result<()> {
    let (report, output) = run(&RunSettings::default())?;

    assert_eq!(report.tickets.len(), 3);
    let expected_prefixes = [
        "Sorted by Time:",
        "{ID:3 Title:Ticket 3 Description:Third ticket Status:in-progress",
        "{ID:2 Title:Ticket 2 Description:Second ticket Status:open",
        "{ID:1 Title:Ticket 1 Description:First ticket Status:closed",
        "",
        "Sorted by Status:",
        "{ID:1 ",
        "{ID:3 ",
        "{ID:2 ",
    ];
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), expected_prefixes.len());
    for (line, prefix) in lines.iter().zip(expected_prefixes) {
        assert!(line.starts_with(prefix), "{:?} should start with {:?}", line, prefix);
    }
    Ok(())
}

#[test]
fn test_run_file_with_zoned_tickets() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("tickets.toml");
    std::fs::write(
        &path,
        r#"
[demo]
sort_modes = ["status", "time"]

[output]
format = "json"

[[tickets]]
title = "Early open"
status = "open"
created_at = "2024-03-01T09:00:00+00:00"
timezone = "Not/AZone"

[[tickets]]
title = "Late open"
status = "open"
created_at = "2024-03-01T09:00:00-08:00"
timezone = "America/Los_Angeles"

[[tickets]]
title = "No offset"
status = "open"
created_at = "2024-03-01T23:00:00"
timezone = "Asia/Tokyo"

[[tickets]]
title = "Closed"
status = "closed"
created_at = "2024-02-01T00:00:00Z"

[[tickets]]
title = ""
status = "open"
"#,
    )?;

    let settings = RunSettings::from_run_file(&RunFile::from_file(&path)?)?;
    let (report, output) = run(&settings)?;

    assert_eq!(report.rejected.len(), 1);
    assert!(matches!(report.rejected[0].error, TicketError::Validation { .. }));

    // The last pass is by time: 09:00-08:00 is 17:00 UTC, and text without
    // an offset is unreadable so it sorts last.
    let titles: Vec<&str> = report.tickets.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Late open", "Early open", "Closed", "No offset"]);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Sorted by Status:");
    let first: serde_json::Value = serde_json::from_str(lines[1])?;
    assert_eq!(first["title"], "Closed");
    let second: serde_json::Value = serde_json::from_str(lines[2])?;
    assert_eq!(second["title"], "Late open");
    assert_eq!(second["created_at"], "2024-03-01T17:00:00Z");
    let fourth: serde_json::Value = serde_json::from_str(lines[4])?;
    assert_eq!(fourth["title"], "No offset");
    assert_eq!(lines[5], "");
    assert_eq!(lines[6], "Sorted by Time:");
    Ok(())
}

#[test]
fn test_identifiers_skip_no_numbers_after_rejection() -> Result<()> {
    let settings = RunSettings {
        drafts: vec![
            TicketDraft::new("A", "", "closed"),
            TicketDraft::new("", "rejected", "open"),
            TicketDraft::new("B", "", "open"),
            TicketDraft::new("C", "", "in-progress"),
        ],
        passes: vec![SortMode::Status],
        ..RunSettings::default()
    };

    let (report, _) = run(&settings)?;
    let pairs: Vec<(u64, &str)> = report
        .tickets
        .iter()
        .map(|t| (t.id, t.title.as_str()))
        .collect();
    assert_eq!(pairs, vec![(1, "A"), (3, "C"), (2, "B")]);
    Ok(())
}

#[test]
fn test_bogus_mode_matches_time_mode() -> Result<()> {
    let file = RunFile::from_toml_str("[demo]\nsort_modes = [\"bogus\"]\n")?;
    let bogus = RunSettings::from_run_file(&file)?;
    let time = RunSettings {
        passes: vec![SortMode::Time],
        ..RunSettings::default()
    };

    let (bogus_report, bogus_output) = run(&bogus)?;
    let (time_report, time_output) = run(&time)?;
    assert_eq!(bogus_report.tickets, time_report.tickets);
    assert_eq!(bogus_output, time_output);
    Ok(())
}

#[test]
fn test_strict_run_file_rejects_unknown_zone() -> Result<()> {
    let file = RunFile::from_toml_str(
        r#"
[normalizer]
mode = "strict"

[output]
format = "csv"

[[tickets]]
title = "Good"
status = "open"
created_at = "2024-03-01T09:00:00Z"

[[tickets]]
title = "Bad"
status = "open"
created_at = "2024-03-01T09:00:00Z"
timezone = "Atlantis/Capital"
"#,
    )?;

    let settings = RunSettings::from_run_file(&file)?;
    assert_eq!(settings.parse_mode, ParseMode::Strict);
    assert_eq!(settings.format, OutputFormat::Csv);

    let (report, output) = run(&settings)?;
    assert_eq!(report.tickets.len(), 1);
    assert!(report.rejected[0].error.is_recoverable());

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Sorted by Time:");
    assert_eq!(lines[1], "id,title,description,status,created_at");
    assert_eq!(lines[2], "1,Good,,open,2024-03-01T09:00:00+00:00");
    Ok(())
}

#[test]
fn test_missing_run_file_is_config_error() {
    let err = RunFile::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, TicketError::RunFileRead { .. }));
    assert!(!err.is_recoverable());
    assert!(!err.user_friendly_message().contains("Could not write tickets"));
}
