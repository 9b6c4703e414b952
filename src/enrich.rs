//! Time enrichment: resolving year-less syslog timestamps to absolute
//! instants and deriving the features the detector aggregates on.

use crate::error::EnrichError;
use crate::parser::{EnrichedRecord, ParsedRecord};
use chrono::{NaiveDateTime, Timelike};

/// Resolve a record's timestamp against a reference year and derive the
/// hour-of-day and minute-floor bucket.
///
/// Syslog timestamps carry no year, so the caller supplies one; it is
/// threaded through explicitly rather than read from shared state. Strict
/// parsing happens here: a text that shape-matched in the parser but is
/// not a real date ("Jun 99 ...") fails with
/// [`EnrichError::MalformedTimestamp`].
pub fn enrich(record: ParsedRecord, reference_year: i32) -> Result<EnrichedRecord, EnrichError> {
    let Some(text) = record.timestamp_text.as_deref() else {
        return Err(EnrichError::MissingTimestamp);
    };

    let stamped = format!("{reference_year} {}", text.trim());
    let instant = NaiveDateTime::parse_from_str(&stamped, "%Y %b %d %H:%M:%S").map_err(|_| {
        EnrichError::MalformedTimestamp {
            text: text.to_string(),
        }
    })?;

    Ok(EnrichedRecord {
        hour: instant.hour(),
        minute_bucket: floor_to_minute(instant),
        instant,
        record,
    })
}

/// Truncate an instant to the start of its containing 60-second window.
pub fn floor_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|floored| floored.with_nanosecond(0))
        .unwrap_or(instant)
}
