//! Lenient timestamp parsing for request bodies.
//!
//! Clients send both RFC 3339 stamps (`2024-03-01T09:00:00Z`) and naive ones
//! (`2024-03-01 09:00:00`). Offsets are normalised to UTC and dropped.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime format: {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn accepts_rfc3339_and_naive_forms() {
        assert_eq!(parse_timestamp("2024-03-01T09:00:00Z"), Some(at(9, 0, 0)));
        assert_eq!(parse_timestamp("2024-03-01T11:00:00+02:00"), Some(at(9, 0, 0)));
        assert_eq!(parse_timestamp("2024-03-01T09:00:00"), Some(at(9, 0, 0)));
        assert_eq!(parse_timestamp("2024-03-01 09:15:30"), Some(at(9, 15, 30)));
        assert_eq!(parse_timestamp("2024-03-01T09:15"), Some(at(9, 15, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01T00:00:00"), None);
    }
}
