// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Human relative time labels ("3 hours ago", "2 minutes from now").

use chrono::{DateTime, Utc};

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1_440.0;
const MINUTES_PER_WEEK: f64 = 10_080.0;
const MINUTES_PER_MONTH: f64 = 43_200.0;
const MINUTES_PER_YEAR: f64 = 525_600.0;

/// Tier thresholds are exclusive upper bounds in minutes, paired with the
/// divisor and unit used inside that tier.
const TIERS: &[(f64, f64, &str)] = &[
    (MINUTES_PER_HOUR, 1.0, "minute"),
    (MINUTES_PER_DAY, MINUTES_PER_HOUR, "hour"),
    (MINUTES_PER_WEEK, MINUTES_PER_DAY, "day"),
    (MINUTES_PER_MONTH, MINUTES_PER_WEEK, "week"),
    (MINUTES_PER_YEAR, MINUTES_PER_MONTH, "month"),
];

fn label(count: i64, unit: &str, past: bool) -> String {
    let plural = if count == 1 { "" } else { "s" };
    let direction = if past { "ago" } else { "from now" };
    format!("{} {}{} {}", count, unit, plural, direction)
}

/// Describe `instant` relative to `now`.
///
/// Anything under a minute either way is "just now". Counts are truncated, so
/// 90 minutes is "1 hour ago" and exactly 60 minutes already selects hours.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use the_tagsmith::grammar::relative_time::describe;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(describe(now - Duration::minutes(90), now), "1 hour ago");
/// assert_eq!(describe(now + Duration::minutes(2), now), "2 minutes from now");
/// ```
pub fn describe(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = now.signed_duration_since(instant).num_milliseconds();
    let past = elapsed_ms >= 0;
    let minutes = (elapsed_ms as f64 / 60_000.0).abs();

    if minutes < 1.0 {
        return "just now".to_string();
    }

    for &(limit, divisor, unit) in TIERS {
        if minutes < limit {
            return label((minutes / divisor) as i64, unit, past);
        }
    }

    label((minutes / MINUTES_PER_YEAR) as i64, "year", past)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_describe_table_driven() {
        struct TestCase {
            name: &'static str,
            offset: Duration,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase { name: "45 seconds ago", offset: Duration::seconds(-45), expected: "just now" },
            TestCase { name: "45 seconds ahead", offset: Duration::seconds(45), expected: "just now" },
            TestCase { name: "same instant", offset: Duration::zero(), expected: "just now" },
            TestCase { name: "exactly one minute", offset: Duration::minutes(-1), expected: "1 minute ago" },
            TestCase { name: "59.5 minutes", offset: Duration::seconds(-3570), expected: "59 minutes ago" },
            TestCase { name: "exactly 60 minutes", offset: Duration::minutes(-60), expected: "1 hour ago" },
            TestCase { name: "90 minutes", offset: Duration::minutes(-90), expected: "1 hour ago" },
            TestCase { name: "exactly one day", offset: Duration::minutes(-1440), expected: "1 day ago" },
            TestCase { name: "three days", offset: Duration::days(-3), expected: "3 days ago" },
            TestCase { name: "exactly one week", offset: Duration::minutes(-10080), expected: "1 week ago" },
            TestCase { name: "29 days", offset: Duration::days(-29), expected: "4 weeks ago" },
            TestCase { name: "exactly 30 days", offset: Duration::minutes(-43200), expected: "1 month ago" },
            TestCase { name: "200 days", offset: Duration::days(-200), expected: "6 months ago" },
            TestCase { name: "exactly 365 days", offset: Duration::minutes(-525600), expected: "1 year ago" },
            TestCase { name: "three years", offset: Duration::days(-3 * 365), expected: "3 years ago" },
            TestCase { name: "2 minutes ahead", offset: Duration::minutes(2), expected: "2 minutes from now" },
            TestCase { name: "1 hour ahead", offset: Duration::minutes(61), expected: "1 hour from now" },
            TestCase { name: "2 days ahead", offset: Duration::days(2), expected: "2 days from now" },
        ];

        for tc in test_cases {
            let instant = now() + tc.offset;
            assert_eq!(describe(instant, now()), tc.expected, "Failed: {}", tc.name);
        }
    }
}
