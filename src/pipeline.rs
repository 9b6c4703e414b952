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

//! Batch orchestration: one in-memory pass from raw log text to parsed and
//! enriched records, with per-row skip accounting so dropped rows are never
//! silent.

use crate::enrich::enrich;
use crate::error::{EnrichError, PipelineError};
use crate::parser::{parse_line, EnrichedRecord, ParsedRecord};
use std::path::Path;

/// Row accounting for one batch run.
///
/// `missing_timestamp` rows cannot be enriched and are expected for lines
/// that never carried a timestamp; `malformed_timestamp` rows matched the
/// timestamp shape but failed strict parsing and were dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Lines seen in the input, including blank ones
    pub total_lines: usize,
    /// Records produced by the parser (blank lines are skipped)
    pub parsed: usize,
    /// Records excluded from enrichment for lack of a timestamp
    pub missing_timestamp: usize,
    /// Records dropped because their timestamp failed strict parsing
    pub malformed_timestamp: usize,
}

/// The outcome of one batch run over a full log.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Every parsed record, timestamped or not (the records-table contract)
    pub records: Vec<ParsedRecord>,
    /// The subset whose timestamps resolved against the reference year
    pub enriched: Vec<EnrichedRecord>,
    pub stats: BatchStats,
}

/// Read a log file and run the parse + enrich pass over it.
///
/// The file is decoded leniently: invalid UTF-8 byte sequences are
/// replaced, never fatal. I/O failures propagate to the caller.
pub fn load_log_file(path: &Path, reference_year: i32) -> Result<Batch, PipelineError> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(process_content(&content, reference_year))
}

/// Parse and enrich every line of the given content in one pass.
///
/// One bad row never aborts the batch: rows that cannot be enriched are
/// counted, malformed timestamps additionally logged with their line
/// number, and processing continues.
pub fn process_content(content: &str, reference_year: i32) -> Batch {
    let start = std::time::Instant::now();
    let mut stats = BatchStats::default();
    let mut records = Vec::new();
    let mut enriched = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        stats.total_lines += 1;

        if line.trim().is_empty() {
            continue;
        }

        let record = parse_line(line);
        match enrich(record.clone(), reference_year) {
            Ok(timed) => enriched.push(timed),
            Err(EnrichError::MissingTimestamp) => stats.missing_timestamp += 1,
            Err(err @ EnrichError::MalformedTimestamp { .. }) => {
                log::warn!("line {line_number}: {err}, dropping row");
                stats.malformed_timestamp += 1;
            }
        }
        records.push(record);
        stats.parsed += 1;
    }

    log::info!(
        "processed {} lines in {:?} ({} records, {} without timestamp, {} malformed)",
        stats.total_lines,
        start.elapsed(),
        stats.parsed,
        stats.missing_timestamp,
        stats.malformed_timestamp
    );

    Batch {
        records,
        enriched,
        stats,
    }
}
