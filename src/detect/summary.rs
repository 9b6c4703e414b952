//! Aggregate activity views derived from the enriched records: the numbers
//! a downstream report or chart renders, computed here so rendering stays a
//! replaceable boundary concern.

use crate::detect::windows::SuspiciousWindow;
use crate::parser::EnrichedRecord;
use indexmap::IndexMap;

/// Hosts ranked by total event count, descending, at most `limit` entries.
/// Ties break by host name so repeated runs rank identically.
pub fn top_hosts(records: &[EnrichedRecord], limit: usize) -> Vec<(String, usize)> {
    let mut totals: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        let Some(host) = record.attributable_host() else {
            continue;
        };
        *totals.entry(host).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = totals
        .into_iter()
        .map(|(host, count)| (host.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Event count per hour of day for attributable events.
pub fn attempts_per_hour(records: &[EnrichedRecord]) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for record in records {
        if record.attributable_host().is_none() {
            continue;
        }
        if let Some(slot) = hours.get_mut(record.hour as usize) {
            *slot += 1;
        }
    }
    hours
}

/// Per host, the largest single-minute event count among its suspicious
/// windows, descending. An empty result means no window met the threshold.
pub fn peak_attempts_per_host(windows: &[SuspiciousWindow]) -> Vec<(String, usize)> {
    let mut peaks: IndexMap<&str, usize> = IndexMap::new();
    for window in windows {
        let peak = peaks.entry(window.source_host.as_str()).or_insert(0);
        *peak = (*peak).max(window.count);
    }

    let mut ranked: Vec<(String, usize)> = peaks
        .into_iter()
        .map(|(host, count)| (host.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::parser::parse_line;

    fn attempt(time: &str, host: &str) -> EnrichedRecord {
        let line = format!("{time} sshd[5]: Failed password for invalid user test from rhost={host}");
        enrich(parse_line(&line), 2026).expect("test line must enrich")
    }

    #[test]
    fn test_top_hosts_ranked_by_volume() {
        let records = vec![
            attempt("Jun 14 15:16:01", "10.0.0.5"),
            attempt("Jun 14 15:16:02", "10.0.0.5"),
            attempt("Jun 14 15:16:03", "10.0.0.5"),
            attempt("Jun 14 16:20:00", "192.168.1.9"),
            attempt("Jun 14 16:20:01", "192.168.1.9"),
            attempt("Jun 15 09:00:00", "172.16.0.1"),
        ];
        let ranked = top_hosts(&records, 2);
        assert_eq!(
            ranked,
            vec![("10.0.0.5".to_string(), 3), ("192.168.1.9".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_hosts_ignores_unattributable_events() {
        let records = vec![enrich(
            parse_line("Jun 14 15:16:01 combo su(pam_unix)[1]: session opened"),
            2026,
        )
        .expect("test line must enrich")];
        assert!(top_hosts(&records, 10).is_empty());
    }

    #[test]
    fn test_attempts_per_hour_buckets() {
        let records = vec![
            attempt("Jun 14 15:16:01", "10.0.0.5"),
            attempt("Jun 14 15:45:00", "10.0.0.5"),
            attempt("Jun 14 03:00:00", "192.168.1.9"),
        ];
        let hours = attempts_per_hour(&records);
        assert_eq!(hours[15], 2);
        assert_eq!(hours[3], 1);
        assert_eq!(hours.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_peak_attempts_takes_max_per_host() {
        use chrono::NaiveDate;
        let minute = |m: u32| {
            NaiveDate::from_ymd_opt(2026, 6, 14)
                .and_then(|d| d.and_hms_opt(15, m, 0))
                .expect("valid test instant")
        };
        let windows = vec![
            SuspiciousWindow {
                source_host: "10.0.0.5".to_string(),
                minute_bucket: minute(16),
                count: 5,
            },
            SuspiciousWindow {
                source_host: "10.0.0.5".to_string(),
                minute_bucket: minute(17),
                count: 9,
            },
            SuspiciousWindow {
                source_host: "192.168.1.9".to_string(),
                minute_bucket: minute(16),
                count: 6,
            },
        ];
        let peaks = peak_attempts_per_host(&windows);
        assert_eq!(
            peaks,
            vec![("10.0.0.5".to_string(), 9), ("192.168.1.9".to_string(), 6)]
        );
    }
}
