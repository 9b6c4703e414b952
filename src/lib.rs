//! AuthSift sifts SSH authentication logs for brute-force activity.
//!
//! The core is a three-stage, single-pass batch pipeline:
//!
//! 1. [`parser`] extracts (timestamp, source host, username) from each raw
//!    line with named pattern rules; missing fields are `None`, never an
//!    error.
//! 2. [`enrich`] resolves the year-less syslog timestamp against a caller
//!    supplied reference year and derives the hour-of-day and the
//!    minute-floor bucket.
//! 3. [`detect`] groups enriched records by (source host, minute bucket)
//!    and flags every group whose event count meets the threshold.
//!
//! File reading lives in [`pipeline`], persistence in [`export`]; both are
//! thin boundaries around the pure core so the pipeline can be tested
//! entirely in memory.

pub mod detect;
pub mod enrich;
pub mod error;
pub mod export;
pub mod parser;
pub mod pipeline;

pub use detect::{detect_windows, SuspiciousWindow, WindowKey, DEFAULT_THRESHOLD};
pub use enrich::enrich;
pub use parser::{parse_line, EnrichedRecord, ParsedRecord};
pub use pipeline::{Batch, BatchStats};
