//! JSON export of guest records.
//!
//! Records can be written as one pretty-printed JSON array or as NDJSON
//! (one compact object per line). Failing rows either abort the export or
//! are skipped with a warning, see [`ErrorPolicy`].

use std::io::Write;

use clap::ValueEnum;
use tracing::warn;

use crate::error::GuestListResult;
use crate::models::GuestRecord;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    Ndjson,
}

/// What to do with rows that fail to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failing row.
    #[default]
    Abort,
    /// Log the failure and continue with the next row.
    Skip,
}

/// Counters of a finished export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub written: usize,
    pub skipped: usize,
}

/// Write `records` to `writer`.
///
/// With [`ErrorPolicy::Skip`] only row-level failures are skipped; errors of
/// the underlying stream always abort. A JSON array is only written once all
/// rows were read, so an aborted export leaves no partial array behind.
pub fn export<I, W>(
    records: I,
    mut writer: W,
    format: OutputFormat,
    policy: ErrorPolicy,
) -> GuestListResult<ExportStats>
where
    I: IntoIterator<Item = GuestListResult<GuestRecord>>,
    W: Write,
{
    let mut stats = ExportStats::default();
    let mut buffered = Vec::new();

    for item in records {
        let record = match item {
            Ok(record) => record,
            Err(err) if policy == ErrorPolicy::Skip && err.is_row_error() => {
                warn!(line = ?err.line(), error = %err, "skipping guest-list row");
                stats.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        match format {
            OutputFormat::Json => buffered.push(record),
            OutputFormat::Ndjson => {
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
            }
        }
        stats.written += 1;
    }

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut writer, &buffered)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guestlist::fixtures::csv;
    use crate::GuestList;
    use serde_json::Value;

    fn two_good_one_bad() -> String {
        csv(&[
            &[("Ticket ID", "1")],
            &[("Ticket ID", "zwei")],
            &[("Ticket ID", "3")],
        ])
    }

    #[test]
    fn test_ndjson_one_object_per_line() {
        let input = csv(&[&[("Ticket ID", "1")], &[("Ticket ID", "2")]]);
        let list = GuestList::new(input.as_bytes()).unwrap();
        let mut out = Vec::new();

        let stats = export(list, &mut out, OutputFormat::Ndjson, ErrorPolicy::Abort).unwrap();
        assert_eq!(stats, ExportStats { written: 2, skipped: 0 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Value = serde_json::from_str(lines[0]).unwrap();
        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["ticket"]["id"], 1);
        assert_eq!(second["ticket"]["id"], 2);
    }

    #[test]
    fn test_json_array() {
        let input = csv(&[&[]]);
        let list = GuestList::new(input.as_bytes()).unwrap();
        let mut out = Vec::new();

        export(list, &mut out, OutputFormat::Json, ErrorPolicy::Abort).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["guest"]["name"], "Anna");
        assert_eq!(records[0]["mobile"], "0171234567");
    }

    #[test]
    fn test_empty_list_is_empty_array() {
        let input = csv(&[]);
        let list = GuestList::new(input.as_bytes()).unwrap();
        let mut out = Vec::new();

        let stats = export(list, &mut out, OutputFormat::Json, ErrorPolicy::Abort).unwrap();
        assert_eq!(stats.written, 0);
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[test]
    fn test_abort_on_bad_row() {
        let input = two_good_one_bad();
        let list = GuestList::new(input.as_bytes()).unwrap();
        let mut out = Vec::new();

        let err = export(list, &mut out, OutputFormat::Json, ErrorPolicy::Abort).unwrap_err();
        assert!(err.to_string().contains("Ticket ID"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_skip_bad_row() {
        let input = two_good_one_bad();
        let list = GuestList::new(input.as_bytes()).unwrap();
        let mut out = Vec::new();

        let stats = export(list, &mut out, OutputFormat::Ndjson, ErrorPolicy::Skip).unwrap();
        assert_eq!(stats, ExportStats { written: 2, skipped: 1 });

        let ids: Vec<u64> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap()["ticket"]["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
