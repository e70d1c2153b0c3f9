//! Lenient timestamp parsing for request bodies.
//!
//! Browser `datetime-local` inputs submit `2024-05-01T09:30` without seconds,
//! while other clients send full ISO-8601 values. Both are accepted here and
//! stored as naive (zone-less) timestamps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, de};

const FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp in any of the accepted layouts.
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn invalid<E: de::Error>(raw: &str) -> E {
    E::custom(format!(
        "invalid timestamp `{raw}`, expected YYYY-MM-DDTHH:MM[:SS]"
    ))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| invalid(&raw))
}

/// `null`, a missing field and `""` all mean "no timestamp".
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse(&raw).map(Some).ok_or_else(|| invalid(&raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn accepts_datetime_local_without_seconds() {
        assert_eq!(parse("2024-05-01T09:30"), Some(at(9, 30, 0)));
    }

    #[test]
    fn accepts_full_iso_and_space_separated_forms() {
        assert_eq!(parse("2024-05-01T09:30:15"), Some(at(9, 30, 15)));
        assert_eq!(parse("2024-05-01T09:30:15.000Z"), Some(at(9, 30, 15)));
        assert_eq!(parse("2024-05-01 09:30:15"), Some(at(9, 30, 15)));
        assert_eq!(parse(" 2024-05-01 09:30 "), Some(at(9, 30, 0)));
    }

    #[test]
    fn rejects_garbage_and_bare_dates() {
        assert_eq!(parse("tomorrow"), None);
        assert_eq!(parse("2024-05-01"), None);
        assert_eq!(parse("2024-13-01T09:30"), None);
    }

    #[derive(Debug, Deserialize)]
    struct Departure {
        #[serde(default, deserialize_with = "deserialize_optional")]
        departure_time: Option<NaiveDateTime>,
    }

    #[test]
    fn optional_treats_missing_null_and_empty_as_none() {
        for body in [r#"{}"#, r#"{"departure_time":null}"#, r#"{"departure_time":""}"#] {
            let parsed: Departure = serde_json::from_str(body).unwrap();
            assert_eq!(parsed.departure_time, None, "body {body}");
        }
        let parsed: Departure =
            serde_json::from_str(r#"{"departure_time":"2024-05-01T09:30"}"#).unwrap();
        assert_eq!(parsed.departure_time, Some(at(9, 30, 0)));
        assert!(serde_json::from_str::<Departure>(r#"{"departure_time":"soon"}"#).is_err());
    }
}
