//! Wall-clock formatting and set-time string parsing.

use chrono::{DateTime, NaiveDate};

use crate::error::{TimeError, TimeResult};

/// Format an epoch timestamp as `YYYY-MM-DD HH:MM:SS`, zero-padded.
///
/// Epochs outside chrono's representable range fall back to the Unix epoch;
/// the platform clock cannot produce such values in practice.
pub fn format_epoch(epoch_seconds: i64) -> String {
    let dt = DateTime::from_timestamp(epoch_seconds, 0).unwrap_or_default();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse an operator-supplied set-time string into an epoch timestamp.
///
/// The accepted form is `YYYY-MM-DD-HH-MM-SS`, where any of the separators
/// may also be `:`, `#` or a space (web clients and G-code senders differ on
/// what they can transmit unescaped, and the report format itself parses
/// back). The year must be four digits; month, day,
/// hour, minute and second must be in calendar range. No field may be
/// missing, and nothing is applied on failure.
pub fn parse_wall_clock(input: &str) -> TimeResult<i64> {
    let normalized = input.trim().replace(['#', ':', ' '], "-");
    let fields: Vec<&str> = normalized.split('-').collect();
    if fields.len() != 6 {
        return Err(TimeError::InvalidTimeString(format!(
            "expected 6 fields, got {}",
            fields.len()
        )));
    }
    if fields[0].len() != 4 {
        return Err(TimeError::InvalidTimeString(
            "year must be 4 digits".to_string(),
        ));
    }
    let numbers: Vec<u32> = fields
        .iter()
        .map(|f| {
            f.parse::<u32>().map_err(|_| {
                TimeError::InvalidTimeString(format!("non-numeric field {:?}", f))
            })
        })
        .collect::<TimeResult<_>>()?;
    let [year, month, day, hour, minute, second] = numbers[..] else {
        unreachable!("field count checked above");
    };
    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        TimeError::InvalidTimeString(format!("invalid date {:04}-{:02}-{:02}", year, month, day))
    })?;
    let dt = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
        TimeError::InvalidTimeString(format!(
            "invalid time {:02}:{:02}:{:02}",
            hour, minute, second
        ))
    })?;
    Ok(dt.and_utc().timestamp())
}
