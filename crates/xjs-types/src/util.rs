use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use std::cmp::Ordering;

/// Layout of a `since` value carrying a literal UTC designator
pub const SINCE_UTC_FORMAT: &str = "%d %b %Y %H:%M:%SZ";

/// Layout of a `since` value carrying a numeric UTC offset
pub const SINCE_OFFSET_FORMAT: &str = "%d %b %Y %H:%M:%S%z";

/// Layout used when echoing instants back to the user
pub const DISPLAY_FORMAT: &str = "%d %b %Y %H:%M:%SZ";

/// Parse a status `since` value into a UTC instant.
///
/// Accepts `"18 Jan 2019 10:15:00Z"` and `"18 Jan 2019 11:15:00+0100"`
/// (a colon inside the offset is tolerated).
pub fn parse_since(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if value.ends_with('Z') {
        return NaiveDateTime::parse_from_str(value, SINCE_UTC_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|e| timestamp_error(value, e));
    }

    DateTime::parse_from_str(value, SINCE_OFFSET_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| timestamp_error(value, e))
}

/// Parse the controller's bare time-of-day (`"10:15:00Z"` or `"11:15:00+0100"`),
/// normalized to UTC.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    let value = value.trim();

    if value.ends_with('Z') {
        return NaiveTime::parse_from_str(value, "%H:%M:%SZ")
            .map_err(|e| timestamp_error(value, e));
    }

    let anchored = format!("01 Jan 1970 {}", value);
    DateTime::parse_from_str(&anchored, SINCE_OFFSET_FORMAT)
        .map(|dt| dt.with_timezone(&Utc).time())
        .map_err(|e| timestamp_error(value, e))
}

/// Epoch-zero, the starting point of timestamp reconstruction
pub fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}

/// Strip a trailing `/<digits>` unit number: `"ntp/3"` -> `"ntp"`.
///
/// Names without such a suffix are returned unchanged.
pub fn strip_unit_suffix(name: &str) -> &str {
    match name.rsplit_once('/') {
        Some((base, number))
            if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

/// Order machine and unit identifiers segment by segment, numerically where
/// both segments are numbers (`"2" < "10"`, `"0/lxd/2" < "0/lxd/10"`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.split('/');
    let mut right = b.split('/');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(ln), Ok(rn)) => ln.cmp(&rn),
                    _ => l.cmp(r),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn timestamp_error(value: &str, err: chrono::ParseError) -> Error {
    Error::Timestamp {
        value: value.to_string(),
        reason: err.to_string(),
    }
}
