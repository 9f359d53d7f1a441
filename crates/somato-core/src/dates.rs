//! Lenient serde adapters for the API's date fields.
//!
//! The remote service is not consistent about time components or offsets:
//! `dataNascimento` may be a bare date or a full datetime, `data` may or may
//! not carry an offset. These adapters accept any of those forms and map
//! anything unparseable to `None` — a bad date degrades to a `-` placeholder
//! downstream instead of failing the whole decode.

use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Deserializer};

pub fn parse_datetime(raw: &str) -> Option<DateTime> {
    let raw = raw.trim();
    if let Ok(dt) = raw.parse::<DateTime>() {
        return Some(dt);
    }
    if let Ok(ts) = raw.parse::<jiff::Timestamp>() {
        return Some(ts.to_zoned(jiff::tz::TimeZone::UTC).datetime());
    }
    raw.parse::<Date>()
        .map(|d| d.to_datetime(Time::midnight()))
        .ok()
}

pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(d) = raw.parse::<Date>() {
        return Some(d);
    }
    parse_datetime(raw).map(|dt| dt.date())
}

pub mod lenient_datetime {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_datetime))
    }
}

pub mod lenient_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_date))
    }
}
