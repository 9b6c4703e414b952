use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One log line after field extraction.
///
/// Absent fields are `None`, never an empty string, so "no rhost on this
/// line" stays distinguishable from "rhost was empty" all the way through
/// the pipeline and any persisted form. The serde names match the columns
/// of the exported records table (`time`, `rhost`, `user`, `raw_line`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Syslog-style timestamp text ("Jun 14 15:16:01"), shape-matched only
    #[serde(rename = "time")]
    pub timestamp_text: Option<String>,
    /// Source host or IP taken from the `rhost=` marker
    #[serde(rename = "rhost")]
    pub source_host: Option<String>,
    /// Username taken from `user=` or `user ` (leftmost occurrence wins)
    #[serde(rename = "user")]
    pub username: Option<String>,
    /// Original line, trailing whitespace trimmed, leading preserved
    pub raw_line: String,
}

/// A parsed record whose timestamp resolved to an absolute instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    /// The record the time features were derived from
    pub record: ParsedRecord,
    /// Absolute instant: reference year + timestamp text
    pub instant: NaiveDateTime,
    /// Hour of day, 0-23
    pub hour: u32,
    /// `instant` with seconds and sub-second components zeroed.
    /// Invariant: `minute_bucket <= instant < minute_bucket + 1 minute`.
    pub minute_bucket: NaiveDateTime,
}

impl EnrichedRecord {
    /// Trimmed source host, if the event can be attributed to one.
    ///
    /// Events without an identifiable external source cannot contribute to
    /// brute-force attribution, so hosts that are absent or whitespace-only
    /// yield `None`.
    pub fn attributable_host(&self) -> Option<&str> {
        self.record
            .source_host
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn enriched_with_host(host: Option<&str>) -> EnrichedRecord {
        let instant = NaiveDate::from_ymd_opt(2026, 6, 14)
            .and_then(|d| d.and_hms_opt(15, 16, 1))
            .expect("valid test instant");
        EnrichedRecord {
            record: ParsedRecord {
                timestamp_text: Some("Jun 14 15:16:01".to_string()),
                source_host: host.map(str::to_string),
                username: None,
                raw_line: String::new(),
            },
            instant,
            hour: 15,
            minute_bucket: instant,
        }
    }

    #[test]
    fn attributable_host_trims_whitespace() {
        let record = enriched_with_host(Some("  10.0.0.5  "));
        assert_eq!(record.attributable_host(), Some("10.0.0.5"));
    }

    #[test]
    fn whitespace_only_host_is_not_attributable() {
        let record = enriched_with_host(Some("   "));
        assert_eq!(record.attributable_host(), None);
    }

    #[test]
    fn absent_host_is_not_attributable() {
        let record = enriched_with_host(None);
        assert_eq!(record.attributable_host(), None);
    }
}
