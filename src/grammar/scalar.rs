// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Literal `true` / `false`, case-sensitive, surrounding whitespace ignored.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// A finite floating point number.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Split on `delimiter`, trimming entries and dropping empties. `None` when nothing is left.
pub fn parse_list(value: &str, delimiter: char) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

/// `key:value;key:value`. Segments without a key or colon are skipped; values
/// may themselves contain colons.
pub fn parse_pairs(value: &str) -> Option<Vec<(String, String)>> {
    let pairs: Vec<(String, String)> = value
        .split(';')
        .filter_map(|segment| segment.split_once(':'))
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    (!pairs.is_empty()).then_some(pairs)
}

/// RFC 3339, `YYYY-MM-DDTHH:MM:SS` (taken as UTC) or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" false "), Some(false));
        assert_eq!(parse_flag("True"), None);
        assert_eq!(parse_flag("1"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_integer(" 40 "), Some(40));
        assert_eq!(parse_integer("4.5"), None);
        assert_eq!(parse_number("0.25"), Some(0.25));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list("admin, editor,,", ','),
            Some(vec!["admin".to_string(), "editor".to_string()])
        );
        assert_eq!(parse_list(" , ", ','), None);
    }

    #[test]
    fn test_parse_pairs() {
        assert_eq!(
            parse_pairs("theme:dark; url:https://x.test ;broken;:novalue"),
            Some(vec![
                ("theme".to_string(), "dark".to_string()),
                ("url".to_string(), "https://x.test".to_string()),
            ])
        );
        assert_eq!(parse_pairs("nothing here"), None);
    }

    #[test]
    fn test_parse_instant() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_instant("2024-06-01T12:00:00+02:00"), Some(expected));
        assert_eq!(parse_instant("2024-06-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_instant("2024-06-01T10:00:00"), Some(expected));
        assert_eq!(
            parse_instant("2024-06-01"),
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_instant("yesterday"), None);
    }
}
