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

//! Error taxonomy.
//!
//! Per-record conditions (a field that did not extract, a timestamp that
//! did not parse) never abort a batch; they surface as `None` fields or as
//! skip counts. Configuration and input errors abort before or at the
//! start of processing.

use thiserror::Error;

/// A record could not be enriched with time features.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichError {
    /// The record carries no timestamp text at all. Such records are
    /// excluded before enrichment rather than treated as failures.
    #[error("record has no timestamp to enrich")]
    MissingTimestamp,

    /// The timestamp text matched the rough shape but failed strict
    /// parsing (invalid month name, out-of-range day, and so on).
    #[error("timestamp {text:?} does not parse as \"Mon DD HH:MM:SS\"")]
    MalformedTimestamp { text: String },
}

/// Window detection was invoked with an unusable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// The threshold must be at least 1; this is caught before any
    /// grouping work starts.
    #[error("threshold must be a positive integer, got {0}")]
    InvalidThreshold(usize),
}

/// The batch pipeline could not run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source log could not be opened or read.
    #[error("cannot read log file: {0}")]
    Input(#[from] std::io::Error),
}

/// A boundary export (CSV/JSON) failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
