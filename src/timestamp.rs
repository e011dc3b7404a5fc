use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::ConvertError;

/// Milliseconds since the Unix epoch, truncated toward zero.
pub fn epoch_millis(timestamp: &DateTime<Utc>) -> i64 {
    // `timestamp_millis` floors, which only differs for pre-epoch instants
    // with a sub-millisecond remainder.
    let millis = timestamp.timestamp_millis();
    if millis < 0 && timestamp.timestamp_subsec_nanos() % 1_000_000 != 0 {
        millis + 1
    } else {
        millis
    }
}

/// Parses a BlogML date attribute as an absolute UTC instant.
///
/// Values carrying an offset are converted to UTC; values without one are
/// taken to already be UTC. A bare date means midnight.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ConvertError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(ConvertError::Schema(format!("invalid timestamp {value:?}")))
}

pub fn parse_epoch_millis(value: &str) -> Result<i64, ConvertError> {
    parse_timestamp(value).map(|dt| epoch_millis(&dt))
}
