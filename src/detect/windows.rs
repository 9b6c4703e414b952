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

//! Per-host minute-window aggregation and threshold flagging.

use crate::error::DetectError;
use crate::parser::EnrichedRecord;
use chrono::NaiveDateTime;
use indexmap::IndexMap;

/// Events from one host within one minute needed to flag the window.
///
/// A human rarely produces five authentication attempts inside a single
/// minute; automated guessing commonly does. Heuristic, tune per
/// environment.
pub const DEFAULT_THRESHOLD: usize = 5;

/// Grouping key: one source host within one 60-second window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowKey {
    pub source_host: String,
    pub minute_bucket: NaiveDateTime,
}

/// A (host, minute) window whose event count met the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousWindow {
    pub source_host: String,
    pub minute_bucket: NaiveDateTime,
    pub count: usize,
}

/// Group records by (source host, minute bucket), count each group, and
/// keep the groups with `count >= threshold`.
///
/// Records without an attributable host are excluded before grouping.
/// The aggregation is exact and order-independent as a set; the returned
/// sequence follows first-seen group order, and any display ordering is a
/// separate sort at the presentation boundary. A zero threshold is a
/// caller configuration error and fails before any grouping work.
pub fn detect_windows(
    records: &[EnrichedRecord],
    threshold: usize,
) -> Result<Vec<SuspiciousWindow>, DetectError> {
    if threshold == 0 {
        return Err(DetectError::InvalidThreshold(threshold));
    }

    let mut counts: IndexMap<WindowKey, usize> = IndexMap::new();
    for record in records {
        let Some(host) = record.attributable_host() else {
            continue;
        };
        let key = WindowKey {
            source_host: host.to_string(),
            minute_bucket: record.minute_bucket,
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    Ok(counts
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|(key, count)| SuspiciousWindow {
            source_host: key.source_host,
            minute_bucket: key.minute_bucket,
            count,
        })
        .collect())
}
