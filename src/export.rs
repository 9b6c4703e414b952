// AuthSift - GPL-3.0-or-later
// This file is part of AuthSift.
//
// AuthSift is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// AuthSift is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with AuthSift.  If not, see <https://www.gnu.org/licenses/>.

//! Persistence boundary for the two tabular contracts: the parsed records
//! table (`time,rhost,user,raw_line`) and the suspicious windows table
//! (`rhost,window_start,count`).
//!
//! The core never touches files for its own semantics; everything here is
//! a thin, replaceable wrapper. Absent fields serialize to empty CSV
//! fields and deserialize back to `None` (the extraction rules match
//! `\S+`, so a present-but-empty field cannot occur and the mapping
//! round-trips losslessly).

use crate::detect::windows::SuspiciousWindow;
use crate::error::ExportError;
use crate::parser::ParsedRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of one suspicious window. `window_start` is the minute
/// bucket rendered at minute precision with seconds zeroed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRow {
    pub rhost: String,
    pub window_start: String,
    pub count: usize,
}

impl From<&SuspiciousWindow> for WindowRow {
    fn from(window: &SuspiciousWindow) -> Self {
        Self {
            rhost: window.source_host.clone(),
            window_start: window
                .minute_bucket
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            count: window.count,
        }
    }
}

/// Write the parsed records table.
pub fn write_records_csv(path: &Path, records: &[ParsedRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read a parsed records table back; empty fields come back as `None`.
pub fn read_records_csv(path: &Path) -> Result<Vec<ParsedRecord>, ExportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Write the suspicious windows table.
pub fn write_windows_csv(path: &Path, windows: &[SuspiciousWindow]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for window in windows {
        writer.serialize(WindowRow::from(window))?;
    }
    writer.flush()?;
    log::info!("wrote {} windows to {}", windows.len(), path.display());
    Ok(())
}

/// Render the suspicious windows as pretty-printed JSON.
pub fn windows_to_json(windows: &[SuspiciousWindow]) -> Result<String, ExportError> {
    let rows: Vec<WindowRow> = windows.iter().map(WindowRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Presentation ordering: by host, then window start. Detection itself
/// guarantees no ordering; callers sort here right before display or
/// export.
pub fn sort_for_display(windows: &mut [SuspiciousWindow]) {
    windows.sort_by(|a, b| {
        (&a.source_host, a.minute_bucket).cmp(&(&b.source_host, b.minute_bucket))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window(host: &str, minute: u32, count: usize) -> SuspiciousWindow {
        SuspiciousWindow {
            source_host: host.to_string(),
            minute_bucket: NaiveDate::from_ymd_opt(2026, 6, 14)
                .and_then(|d| d.and_hms_opt(15, minute, 0))
                .expect("valid test instant"),
            count,
        }
    }

    #[test]
    fn test_records_round_trip_preserves_absent_fields() {
        let records = vec![
            ParsedRecord {
                timestamp_text: Some("Jun 14 15:16:01".to_string()),
                source_host: Some("10.0.0.5".to_string()),
                username: Some("admin".to_string()),
                raw_line: "Jun 14 15:16:01 sshd[123]: Failed password, from rhost=10.0.0.5"
                    .to_string(),
            },
            ParsedRecord {
                timestamp_text: None,
                source_host: None,
                username: None,
                raw_line: "kernel: audit backlog limit exceeded".to_string(),
            },
        ];

        let file = tempfile::NamedTempFile::new().expect("temp file");
        write_records_csv(file.path(), &records).expect("write table");
        let read_back = read_records_csv(file.path()).expect("read table");
        assert_eq!(read_back, records);
    }

    #[test]
    fn test_records_table_header() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        write_records_csv(
            file.path(),
            &[ParsedRecord {
                timestamp_text: None,
                source_host: None,
                username: None,
                raw_line: "x".to_string(),
            }],
        )
        .expect("write table");
        let text = std::fs::read_to_string(file.path()).expect("readable");
        assert!(text.starts_with("time,rhost,user,raw_line\n"));
    }

    #[test]
    fn test_window_row_formats_minute_precision() {
        let row = WindowRow::from(&window("10.0.0.5", 16, 5));
        assert_eq!(row.window_start, "2026-06-14 15:16:00");
        assert_eq!(row.rhost, "10.0.0.5");
        assert_eq!(row.count, 5);
    }

    #[test]
    fn test_windows_csv_shape() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        write_windows_csv(file.path(), &[window("10.0.0.5", 16, 5)]).expect("write table");
        let text = std::fs::read_to_string(file.path()).expect("readable");
        assert_eq!(
            text,
            "rhost,window_start,count\n10.0.0.5,2026-06-14 15:16:00,5\n"
        );
    }

    #[test]
    fn test_windows_json_shape() {
        let json = windows_to_json(&[window("10.0.0.5", 16, 5)]).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["rhost"], "10.0.0.5");
        assert_eq!(value[0]["window_start"], "2026-06-14 15:16:00");
        assert_eq!(value[0]["count"], 5);
    }

    #[test]
    fn test_display_sort_orders_host_then_minute() {
        let mut windows = vec![
            window("192.168.1.9", 10, 6),
            window("10.0.0.5", 17, 5),
            window("10.0.0.5", 16, 5),
        ];
        sort_for_display(&mut windows);
        assert_eq!(windows[0].source_host, "10.0.0.5");
        assert_eq!(windows[0].minute_bucket.format("%M").to_string(), "16");
        assert_eq!(windows[2].source_host, "192.168.1.9");
    }
}
