pub mod record;

use fancy_regex::Regex;
use std::sync::LazyLock;

pub use record::{EnrichedRecord, ParsedRecord};

// Field extraction rules. One named rule per field so a new log dialect
// only means adding a rule, not rewriting the parser. Matching is pure
// shape matching; month/day ranges are validated later at enrichment.
static TIMESTAMP_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]{2}\s+\d{1,2}\s\d{2}:\d{2}:\d{2}\b").expect("valid regex literal")
});

static RHOST_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?<=rhost=)\S+").expect("valid regex literal"));

// Combined rule for both `user=<name>` and `user <name>`. The leftmost
// occurrence in the line wins; at a single position the two five-byte
// lookbehinds are mutually exclusive.
static USER_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?<=user[ ]|user=)\S+").expect("valid regex literal"));

/// Extract (timestamp, source host, username) from one raw log line.
///
/// Total function: every field that cannot be extracted comes back as
/// `None` and the line is never rejected. Trailing whitespace (including
/// the newline) is trimmed from `raw_line`; leading whitespace is kept.
pub fn parse_line(line: &str) -> ParsedRecord {
    ParsedRecord {
        timestamp_text: first_match(&TIMESTAMP_RULE, line),
        source_host: first_match(&RHOST_RULE, line),
        username: first_match(&USER_RULE, line),
        raw_line: line.trim_end().to_string(),
    }
}

fn first_match(rule: &Regex, line: &str) -> Option<String> {
    rule.find(line)
        .unwrap_or(None)
        .map(|found| found.as_str().to_string())
}
